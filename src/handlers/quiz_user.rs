// src/handlers/quiz_user.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use tracing::instrument;

use crate::{
    error::AppError,
    messages,
    models::quiz_user::{CreateQuizUserRequest, QuizUser},
};

/// Registers a quiz taker.
///
/// `year` may arrive as a number or a numeric string. A value that does not
/// parse, like a duplicate roll number, ends up as ERROR_CREATING_USER.
#[instrument(skip_all)]
pub async fn create_quiz_user(
    State(pool): State<PgPool>,
    payload: Result<Json<CreateQuizUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let year = payload.parsed_year().ok_or_else(|| {
        AppError::internal(
            messages::ERROR_CREATING_USER,
            format!("year {} is not an integer", payload.year),
        )
    })?;

    let user = sqlx::query_as::<_, QuizUser>(
        r#"
        INSERT INTO quiz_users (name, roll_no, year)
        VALUES ($1, $2, $3)
        RETURNING id, name, roll_no, year
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.roll_no)
    .bind(year)
    .fetch_one(&pool)
    .await
    .map_err(|e| AppError::internal(messages::ERROR_CREATING_USER, e))?;

    tracing::info!(user_id = user.id, "Created quiz user: {}", user.name);

    Ok((StatusCode::CREATED, Json(user)))
}
