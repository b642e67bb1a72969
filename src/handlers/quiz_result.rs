// src/handlers/quiz_result.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use tracing::instrument;

use crate::{
    error::AppError,
    messages,
    models::{
        quiz::ClubQuery,
        quiz_result::{QuizResult, QuizResultRow, QuizResultWithUser, SubmitQuizRequest},
    },
};

/// Records a user's submission for a quiz.
///
/// Answers are stored as JSON text. The score is taken as given and repeated
/// submissions each create a new record. Unknown quiz or user ids are rejected
/// by the foreign keys and surface as ERROR_SUBMITTING_QUIZ_RESULT.
#[instrument(skip_all)]
pub async fn submit_quiz(
    State(pool): State<PgPool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = path?;
    let Json(payload) = payload?;

    let answers = serde_json::to_string(&payload.answers)
        .map_err(|e| AppError::internal(messages::ERROR_SUBMITTING_QUIZ_RESULT, e))?;

    let result = sqlx::query_as::<_, QuizResult>(
        r#"
        INSERT INTO results (score, answers, quiz_id, user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, score, answers, quiz_id, user_id, created_at
        "#,
    )
    .bind(payload.score)
    .bind(answers)
    .bind(quiz_id)
    .bind(payload.user_id)
    .fetch_one(&pool)
    .await
    .map_err(|e| AppError::internal(messages::ERROR_SUBMITTING_QUIZ_RESULT, e))?;

    tracing::info!(
        quiz_id,
        user_id = payload.user_id,
        result_id = result.id,
        "Quiz result submitted"
    );

    Ok((StatusCode::CREATED, Json(result)))
}

/// Lists every result for a quiz, each with its user.
///
/// Only the owning club may read them. An unknown quiz, a foreign club and a
/// missing ClubID all get the same ACCESS_DENIED, so quiz ids cannot be probed.
#[instrument(skip_all)]
pub async fn get_quiz_results(
    State(pool): State<PgPool>,
    path: Result<Path<i64>, PathRejection>,
    Query(query): Query<ClubQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Path(quiz_id) = path?;
    let Some(club_id) = query.parsed() else {
        tracing::warn!(quiz_id, "Quiz results requested without a ClubID");
        return Err(AppError::Forbidden(messages::ACCESS_DENIED.to_string()));
    };

    let owner: Option<i64> = sqlx::query_scalar("SELECT club_id FROM quizzes WHERE id = $1")
        .bind(quiz_id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| AppError::internal(messages::ERROR_FETCHING_QUIZ_RESULTS, e))?;

    if owner != Some(club_id) {
        tracing::warn!(quiz_id, club_id, "Unauthorized access to quiz results");
        return Err(AppError::Forbidden(messages::ACCESS_DENIED.to_string()));
    }

    let rows = sqlx::query_as::<_, QuizResultRow>(
        r#"
        SELECT
            r.id,
            r.score,
            r.answers,
            r.quiz_id,
            r.user_id,
            r.created_at,
            u.name AS user_name,
            u.roll_no AS user_roll_no,
            u.year AS user_year
        FROM results r
        JOIN quiz_users u ON r.user_id = u.id
        WHERE r.quiz_id = $1
        ORDER BY r.created_at, r.id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| AppError::internal(messages::ERROR_FETCHING_QUIZ_RESULTS, e))?;

    let results: Vec<QuizResultWithUser> = rows.into_iter().map(Into::into).collect();

    tracing::info!(quiz_id, count = results.len(), "Fetched quiz results");

    Ok(Json(results))
}
