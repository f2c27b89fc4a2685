use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ApiError;
use thiserror::Error;

/// Ошибки обработки запроса
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::BadRequest(msg) | Self::NotFound(msg) => vec![msg.clone()],
        }
    }

    /// Attaches the request path, producing a renderable error body.
    pub fn at(self, path: impl Into<String>) -> PathError {
        PathError {
            path: path.into(),
            error: self,
        }
    }
}

/// Unreadable bodies (bad JSON, wrong field types, unknown fields, missing
/// content type) all answer 400 like any other malformed request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// [`AppError`] bound to the request path it happened on.
#[derive(Debug)]
pub struct PathError {
    pub path: String,
    pub error: AppError,
}

impl PathError {
    pub fn to_api_error(&self) -> ApiError {
        ApiError::new(
            self.path.clone(),
            self.error.messages(),
            self.error.status().as_u16(),
        )
    }
}

impl IntoResponse for PathError {
    fn into_response(self) -> Response {
        tracing::warn!("{} rejected: {}", self.path, self.error);
        (self.error.status(), Json(self.to_api_error())).into_response()
    }
}
