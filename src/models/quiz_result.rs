// src/models/quiz_result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::quiz_user::QuizUser;

/// Represents the 'results' table: one user's scored submission for one quiz.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: i64,
    pub score: i32,
    /// Submitted answers, stored as serialized JSON text.
    pub answers: String,
    pub quiz_id: i64,
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A result joined with the user who submitted it.
#[derive(Debug, Serialize)]
pub struct QuizResultWithUser {
    #[serde(flatten)]
    pub result: QuizResult,
    pub user: QuizUser,
}

/// Flat row from `results JOIN quiz_users`.
#[derive(Debug, FromRow)]
pub struct QuizResultRow {
    pub id: i64,
    pub score: i32,
    pub answers: String,
    pub quiz_id: i64,
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub user_name: String,
    pub user_roll_no: String,
    pub user_year: i32,
}

impl From<QuizResultRow> for QuizResultWithUser {
    fn from(row: QuizResultRow) -> Self {
        Self {
            user: QuizUser {
                id: row.user_id,
                name: row.user_name,
                roll_no: row.user_roll_no,
                year: row.user_year,
            },
            result: QuizResult {
                id: row.id,
                score: row.score,
                answers: row.answers,
                quiz_id: row.quiz_id,
                user_id: row.user_id,
                created_at: row.created_at,
            },
        }
    }
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub user_id: i64,
    /// Free-form answers; stored verbatim as JSON text.
    pub answers: serde_json::Value,
    pub score: i32,
}
