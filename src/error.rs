use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request-time errors, converted to structured JSON responses.
///
/// Load-time failures never surface here directly; they are captured once at
/// startup and reach clients as `Unavailable` on every request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("recommendation data unavailable: {0}")]
    Unavailable(String),

    #[error("no recommendations for member {0}")]
    UnknownMember(i64),

    #[error("{0}")]
    BadRequest(String),

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": self.to_string() }),
            ),
            AppError::UnknownMember(member_id) => (
                StatusCode::NOT_FOUND,
                json!({ "memberId": member_id, "formations": null }),
            ),
            AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            AppError::Template(_) => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
