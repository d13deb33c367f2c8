use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Invalid admin password")]
    Unauthorized,

    #[error("No file provided")]
    MissingFile,

    #[error("Invalid file type: {0}. Only JPEG, PNG, WebP and GIF are allowed.")]
    InvalidFileType(String),

    #[error("File too large: {0} bytes. Maximum size is 5MB.")]
    FileTooLarge(usize),

    #[error("Storage bucket not set up. Please create the '{0}' bucket first.")]
    BucketMissing(String),

    #[error("Storage error: {0}")]
    Upstream(String),
}

pub type MediaResult<T> = Result<T, MediaError>;

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Unauthorized => {
                AppError::Unauthorized("Invalid admin password".to_string())
            }
            MediaError::MissingFile => AppError::BadRequest("No file provided".to_string()),
            MediaError::InvalidFileType(_) => AppError::UnsupportedMediaType(err.to_string()),
            MediaError::FileTooLarge(_) => AppError::PayloadTooLarge(err.to_string()),
            MediaError::BucketMissing(_) => AppError::ServiceUnavailable(err.to_string()),
            MediaError::Upstream(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
