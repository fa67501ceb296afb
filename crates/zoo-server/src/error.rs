//! Server-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{features::shared::validation::ValidationError, storage::StoreError};

/// Result type alias for handler operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Application error types
///
/// Responses carry the message as a plain-text body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("At least one field must be provided for update")]
    NoFieldsToUpdate,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidBody(_) | AppError::NoFieldsToUpdate => {
                StatusCode::BAD_REQUEST
            },
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Storage(ref e) = self {
            tracing::error!("Storage error: {:?}", e);
        }

        (status, self.to_string()).into_response()
    }
}
