use std::collections::BTreeMap;

use thiserror::Error;

/// Failure of a call against the inventory backend.
///
/// The error is kept by resources as their last error value, so it owns its
/// details and is cheap to clone.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound,

    #[error("Validation error: {}", format_fields(.0))]
    Validation(BTreeMap<String, String>),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn format_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
