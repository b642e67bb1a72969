// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    /// The prompt shown to the quiz taker.
    pub question: String,

    /// Ordered answer choices, stored as a JSON array.
    pub options: Json<Vec<String>>,

    pub correct_answer: String,

    pub quiz_id: i64,
}

/// One question inside a create-quiz request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000, message = "Question must be between 1 and 1000 characters."))]
    pub question: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    #[validate(length(min = 1, max = 500, message = "Correct answer must be between 1 and 500 characters."))]
    pub correct_answer: String,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.is_empty() {
        return Err(validator::ValidationError::new("options_cannot_be_empty"));
    }
    for opt in options {
        if opt.chars().count() > 500 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: Vec<String>) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: "2+2?".to_string(),
            options,
            correct_answer: "4".to_string(),
        }
    }

    #[test]
    fn accepts_a_regular_question() {
        assert!(question(vec!["3".into(), "4".into()]).validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_oversized_options() {
        assert!(question(vec![]).validate().is_err());
        assert!(question(vec!["x".repeat(501)]).validate().is_err());
    }

    #[test]
    fn option_length_counts_characters() {
        // 300 characters, 600 bytes
        assert!(question(vec!["é".repeat(300)]).validate().is_ok());
        assert!(question(vec!["é".repeat(501)]).validate().is_err());
    }

    #[test]
    fn serializes_in_camel_case() {
        let q = Question {
            id: 1,
            question: "2+2?".to_string(),
            options: Json(vec!["3".to_string(), "4".to_string()]),
            correct_answer: "4".to_string(),
            quiz_id: 7,
        };

        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["correctAnswer"], "4");
        assert_eq!(value["quizId"], 7);
        assert_eq!(value["options"], serde_json::json!(["3", "4"]));
    }
}
