use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database table not set up. Please create the '{0}' table first.")]
    NotProvisioned(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type LeadResult<T> = Result<T, LeadError>;

impl From<StoreError> for LeadError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotProvisioned(relation) => LeadError::NotProvisioned(relation),
            other => LeadError::Internal(other.to_string()),
        }
    }
}

impl From<LeadError> for AppError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::Validation(msg) => AppError::BadRequest(msg),
            LeadError::NotProvisioned(relation) => AppError::ServiceUnavailable(format!(
                "Database table not set up. Please create the '{}' table first.",
                relation
            )),
            LeadError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
