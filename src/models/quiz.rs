// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{error::AppError, messages, models::question::{CreateQuestionRequest, Question}};

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,

    pub title: String,

    /// Argon2 hash of the access code.
    /// Skipped during serialization so it never leaves the server.
    #[serde(skip)]
    pub secret_code: String,

    /// Owning club, supplied by the caller as `ClubID`.
    pub club_id: i64,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Projection returned when listing a club's quizzes.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: i64,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A quiz together with its full question list.
#[derive(Debug, Serialize)]
pub struct QuizWithQuestions {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<Question>,
}

/// DTO for creating a quiz.
///
/// Every field defaults so a missing `secretCode` is reported as such rather
/// than as a generic decode failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."))]
    pub title: String,

    #[serde(default)]
    #[validate(nested)]
    pub questions: Vec<CreateQuestionRequest>,

    /// Kept as raw JSON so a non-string value can be told apart from a missing one.
    #[serde(default)]
    pub secret_code: Option<serde_json::Value>,
}

impl CreateQuizRequest {
    /// The plaintext secret code, if present as a non-empty string.
    pub fn secret_code(&self) -> Option<&str> {
        self.secret_code
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|code| !code.is_empty())
    }
}

/// Body of a quiz fetch.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAccessRequest {
    pub secret_code: Option<String>,
}

/// `?ClubID=` query parameter, parsed by hand so failures keep the JSON error shape.
#[derive(Debug, Deserialize)]
pub struct ClubQuery {
    #[serde(rename = "ClubID")]
    pub club_id: Option<String>,
}

impl ClubQuery {
    /// The numeric club id, if one was supplied.
    pub fn parsed(&self) -> Option<i64> {
        self.club_id
            .as_deref()
            .map(str::trim)
            .and_then(|raw| raw.parse::<i64>().ok())
    }

    /// The club id, or a logged 400 when it is missing or not a number.
    pub fn club_id(&self) -> Result<i64, AppError> {
        self.parsed().ok_or_else(|| {
            tracing::warn!(club_id = ?self.club_id, "Invalid or missing ClubID");
            AppError::BadRequest(messages::INVALID_CLUB_ID.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CreateQuizRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn secret_code_must_be_a_non_empty_string() {
        assert_eq!(request(json!({ "secretCode": "abc123" })).secret_code(), Some("abc123"));
        assert_eq!(request(json!({})).secret_code(), None);
        assert_eq!(request(json!({ "secretCode": null })).secret_code(), None);
        assert_eq!(request(json!({ "secretCode": "" })).secret_code(), None);
        assert_eq!(request(json!({ "secretCode": 123456 })).secret_code(), None);
        assert_eq!(request(json!({ "secretCode": ["abc"] })).secret_code(), None);
    }

    #[test]
    fn validates_nested_questions() {
        let ok = request(json!({
            "title": "Math",
            "questions": [{ "question": "2+2?", "options": ["3", "4"], "correctAnswer": "4" }],
            "secretCode": "abc123"
        }));
        assert!(ok.validate().is_ok());

        let bad = request(json!({
            "title": "Math",
            "questions": [{ "question": "2+2?", "options": [], "correctAnswer": "4" }],
            "secretCode": "abc123"
        }));
        assert!(bad.validate().is_err());

        let untitled = request(json!({ "questions": [], "secretCode": "abc123" }));
        assert!(untitled.validate().is_err());
    }

    #[test]
    fn club_id_parsing() {
        let query = |raw: Option<&str>| ClubQuery { club_id: raw.map(str::to_string) };

        assert_eq!(query(Some("5")).club_id().unwrap(), 5);
        assert_eq!(query(Some(" 12 ")).club_id().unwrap(), 12);
        assert!(query(Some("five")).club_id().is_err());
        assert!(query(Some("")).club_id().is_err());
        assert!(query(None).club_id().is_err());
        assert_eq!(query(Some("7")).parsed(), Some(7));
        assert_eq!(query(Some("x7")).parsed(), None);
    }

    #[test]
    fn invalid_club_id_is_logged() {
        let logs = crate::test_utils::CapturedLogs::default();

        tracing::subscriber::with_default(logs.subscriber(), || {
            let query = ClubQuery { club_id: Some("abc".to_string()) };
            assert!(query.club_id().is_err());
        });

        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("Invalid or missing ClubID"), "{output}");
    }

    #[test]
    fn quiz_json_never_contains_the_hash() {
        let quiz = Quiz {
            id: 1,
            title: "Math".to_string(),
            secret_code: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            club_id: 5,
            created_at: chrono::Utc::now(),
        };
        let full = QuizWithQuestions { quiz, questions: vec![] };

        let value = serde_json::to_value(&full).unwrap();
        assert!(value.get("secretCode").is_none());
        assert!(!value.to_string().contains("argon2"));
        assert_eq!(value["clubId"], 5);
        assert_eq!(value["questions"], json!([]));
    }
}
