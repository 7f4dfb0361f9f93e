//! Finance error types.

use fintrack_shared::AppError;
use thiserror::Error;

use super::validation::EntryValidationError;

/// Errors that can occur while handling finance entries.
#[derive(Debug, Error)]
pub enum FinanceError {
    /// The entry payload failed validation.
    #[error(transparent)]
    Validation(#[from] EntryValidationError),

    /// A query parameter could not be parsed.
    #[error("Invalid {name} parameter: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Raw value received.
        value: String,
    },

    /// A required query parameter is absent.
    #[error("The {0} query parameter is required")]
    MissingParameter(&'static str),

    /// The entry does not exist or belongs to another user.
    #[error("Entry not found")]
    NotFound,

    /// The record store failed.
    #[error("Store error: {0}")]
    Store(String),
}

impl From<FinanceError> for AppError {
    fn from(err: FinanceError) -> Self {
        match err {
            FinanceError::Validation(_)
            | FinanceError::InvalidParameter { .. }
            | FinanceError::MissingParameter(_) => Self::Validation(err.to_string()),
            FinanceError::NotFound => Self::NotFound(err.to_string()),
            FinanceError::Store(msg) => Self::Database(msg),
        }
    }
}
