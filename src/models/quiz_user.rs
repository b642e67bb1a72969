// src/models/quiz_user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'quiz_users' table: a person taking quizzes.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizUser {
    pub id: i64,
    pub name: String,
    /// Unique roll number.
    pub roll_no: String,
    pub year: i32,
}

/// DTO for registering a quiz taker.
///
/// Name and roll number are stored as given; uniqueness of the roll number is
/// left to the database.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizUserRequest {
    pub name: String,
    pub roll_no: String,
    /// Either a JSON number or a numeric string such as `"2024"`.
    pub year: serde_json::Value,
}

impl CreateQuizUserRequest {
    pub fn parsed_year(&self) -> Option<i32> {
        match &self.year {
            serde_json::Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(year: serde_json::Value) -> CreateQuizUserRequest {
        serde_json::from_value(json!({ "name": "Asha", "rollNo": "21CS001", "year": year })).unwrap()
    }

    #[test]
    fn year_accepts_numbers_and_numeric_strings() {
        assert_eq!(request(json!("2024")).parsed_year(), Some(2024));
        assert_eq!(request(json!(" 3 ")).parsed_year(), Some(3));
        assert_eq!(request(json!(2)).parsed_year(), Some(2));
    }

    #[test]
    fn year_rejects_everything_else() {
        assert_eq!(request(json!("second")).parsed_year(), None);
        assert_eq!(request(json!(2.5)).parsed_year(), None);
        assert_eq!(request(json!(null)).parsed_year(), None);
        assert_eq!(request(json!(9_999_999_999_i64)).parsed_year(), None);
    }

    #[test]
    fn roll_no_is_camel_case_on_the_wire() {
        let user = QuizUser {
            id: 3,
            name: "Asha".to_string(),
            roll_no: "21CS001".to_string(),
            year: 2,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "id": 3, "name": "Asha", "rollNo": "21CS001", "year": 2 }));
    }
}
