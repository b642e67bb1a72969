// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error.
    // Carries the public message and the detail that only goes to the log.
    InternalServerError(&'static str, String),

    // 400 Bad Request
    BadRequest(String),

    // 403 Forbidden (wrong secret code, foreign club)
    Forbidden(String),

    // 404 Not Found
    NotFound(String),
}

impl AppError {
    /// Wraps a collaborator failure under the operation's public message.
    pub fn internal(message: &'static str, err: impl fmt::Display) -> Self {
        AppError::InternalServerError(message, err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(message, detail) => {
                tracing::error!("{}: {}", message, detail);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Undecodable JSON bodies become `{error}` 400s instead of axum's plain text.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!("Rejected request: {}", message);
        AppError::BadRequest(message)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!("Rejected request: {}", message);
        AppError::BadRequest(message)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!("Rejected request: {}", message);
        AppError::BadRequest(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        extract::FromRequest,
        http::{Request, header},
    };

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let response =
            AppError::internal("Error creating quiz", "connection refused (os error 111)")
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Error creating quiz" }));
    }

    #[tokio::test]
    async fn client_errors_keep_their_status() {
        let cases = [
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            let response = err.into_response();
            assert_eq!(response.status(), status);
            let body = body_json(response).await;
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn rejected_bodies_are_logged() {
        let request = Request::post("/api/quiz-users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{oops"))
            .unwrap();
        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        let logs = crate::test_utils::CapturedLogs::default();
        let err = {
            let _guard = tracing::subscriber::set_default(logs.subscriber());
            AppError::from(rejection)
        };

        assert!(matches!(err, AppError::BadRequest(_)));
        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("Rejected request"), "{output}");
    }
}
