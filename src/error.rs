use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the user RPCs.
///
/// Infrastructure variants keep their source for server-side logging; the
/// `Display` text (what callers see) never includes it.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("password doesn't match")]
    PasswordMismatch,
    #[error("invalid role value: {0}")]
    InvalidRole(String),
    #[error("user with id {0} doesn't exist")]
    NotFound(i64),
    #[error("id generation failed")]
    IdGeneration(#[source] rand::Error),
    #[error("failed to insert user")]
    Insert(#[source] sqlx::Error),
    #[error("failed to select user")]
    Select(#[source] sqlx::Error),
    #[error("failed to update user data")]
    Update(#[source] sqlx::Error),
    #[error("failed to delete user")]
    Delete(#[source] sqlx::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::PasswordMismatch | ServiceError::InvalidRole(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::IdGeneration(_)
            | ServiceError::Insert(_)
            | ServiceError::Select(_)
            | ServiceError::Update(_)
            | ServiceError::Delete(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
