//! Top-level error type for the binary.
//!
//! Trace generation has no failure modes; every error here comes from loading
//! configuration or data, or from terminal and output I/O.

use crate::config::ConfigError;
use crate::input::{InputError, ValidationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StudioError>;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid array data: {0}")]
    Input(#[from] InputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for StudioError {
    fn from(e: ValidationError) -> Self {
        StudioError::Input(InputError::Validation(e))
    }
}
