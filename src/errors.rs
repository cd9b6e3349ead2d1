use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

/// Application error type shared by repositories and handlers.
///
/// `status_code` is the single source of truth for error-to-status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::error::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::ValidationFailed(validation_messages(&errors))
    }
}

/// Flattens `ValidationErrors` into one human-readable message per violated
/// constraint, sorted for a stable response order.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Not-found failures render their message text as the body.
            Self::NotFound(message) => (status, message).into_response(),
            // Validation failures itemize one message per violation.
            Self::ValidationFailed(messages) => (status, Json(messages)).into_response(),
            // Internal failures must not leak driver detail to clients.
            Self::DatabaseError(err) => {
                error!("database failure: {}", err);
                (status, "Database error".to_string()).into_response()
            }
        }
    }
}
