// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::{PgPool, Postgres, QueryBuilder, types::Json as SqlJson};
use tracing::instrument;
use validator::Validate;

use crate::{
    error::AppError,
    messages,
    models::{
        question::Question,
        quiz::{ClubQuery, CreateQuizRequest, Quiz, QuizAccessRequest, QuizSummary, QuizWithQuestions},
    },
    utils::hash::{hash_secret_code, verify_secret_code},
};

/// Creates a quiz and its questions for the club given as `?ClubID=`.
///
/// * Rejects a missing or non-string `secretCode` before anything else.
/// * Stores only the Argon2 hash of the code.
/// * Writes the quiz and every question in one transaction.
#[instrument(skip_all)]
pub async fn create_quiz(
    State(pool): State<PgPool>,
    Query(query): Query<ClubQuery>,
    payload: Result<Json<CreateQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let Some(secret_code) = payload.secret_code() else {
        tracing::warn!("Invalid or missing secret code during quiz creation");
        return Err(AppError::BadRequest(messages::INVALID_SECRET_CODE.to_string()));
    };

    if let Err(validation_errors) = payload.validate() {
        tracing::warn!("Rejected quiz payload: {}", validation_errors);
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let club_id = query.club_id()?;

    let fail = |e: &dyn std::fmt::Display| AppError::internal(messages::ERROR_CREATING_QUIZ, e);

    let hashed_secret_code = hash_secret_code(secret_code).map_err(|e| fail(&e))?;

    let mut tx = pool.begin().await.map_err(|e| fail(&e))?;

    let quiz_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO quizzes (title, secret_code, club_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&payload.title)
    .bind(hashed_secret_code)
    .bind(club_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| fail(&e))?;

    if !payload.questions.is_empty() {
        let mut query_builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO questions (question, options, correct_answer, quiz_id) ",
        );

        query_builder.push_values(&payload.questions, |mut row, q| {
            row.push_bind(q.question.clone())
                .push_bind(SqlJson(q.options.clone()))
                .push_bind(q.correct_answer.clone())
                .push_bind(quiz_id);
        });

        query_builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| fail(&e))?;
    }

    tx.commit().await.map_err(|e| fail(&e))?;

    tracing::info!(
        quiz_id,
        club_id,
        questions = payload.questions.len(),
        "Quiz created: {}",
        payload.title
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "quizId": quiz_id })),
    ))
}

/// Lists a club's quizzes as `{id, title, createdAt}`, newest first.
#[instrument(skip_all)]
pub async fn list_club_quizzes(
    State(pool): State<PgPool>,
    Query(query): Query<ClubQuery>,
) -> Result<impl IntoResponse, AppError> {
    let club_id = query.club_id()?;

    let quizzes = sqlx::query_as::<_, QuizSummary>(
        r#"
        SELECT id, title, created_at
        FROM quizzes
        WHERE club_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(club_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| AppError::internal(messages::ERROR_FETCHING_QUIZZES, e))?;

    tracing::info!(club_id, count = quizzes.len(), "Fetched club quizzes");

    Ok(Json(quizzes))
}

/// Returns a quiz with all of its questions, gated on its secret code.
///
/// A missing code is treated the same as a wrong one.
#[instrument(skip_all)]
pub async fn get_quiz_by_id(
    State(pool): State<PgPool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuizAccessRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let secret_code = payload.map(|Json(p)| p).unwrap_or_default().secret_code;

    let quiz = sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title, secret_code, club_id, created_at
        FROM quizzes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await
    .map_err(|e| AppError::internal(messages::ERROR_FETCHING_QUIZ, e))?;

    let Some(quiz) = quiz else {
        tracing::warn!(quiz_id = id, "Quiz not found");
        return Err(AppError::NotFound(messages::QUIZ_NOT_FOUND.to_string()));
    };

    let is_valid = match secret_code.as_deref() {
        Some(code) => verify_secret_code(code, &quiz.secret_code)
            .map_err(|e| AppError::internal(messages::ERROR_FETCHING_QUIZ, e))?,
        None => false,
    };

    if !is_valid {
        tracing::warn!(quiz_id = id, "Invalid secret code");
        return Err(AppError::Forbidden(messages::INVALID_SECRET_CODE.to_string()));
    }

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, options, correct_answer, quiz_id
        FROM questions
        WHERE quiz_id = $1
        ORDER BY id
        "#,
    )
    .bind(id)
    .fetch_all(&pool)
    .await
    .map_err(|e| AppError::internal(messages::ERROR_FETCHING_QUIZ, e))?;

    tracing::info!(quiz_id = id, "Fetched quiz");

    Ok(Json(QuizWithQuestions { quiz, questions }))
}
