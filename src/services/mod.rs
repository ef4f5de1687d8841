//! Services translating submitted forms into dashboard operations.

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;

pub mod main;
pub mod products;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backend request failed: {0}")]
    Api(ApiError),

    #[error("{0}")]
    Form(String),

    #[error("not found")]
    NotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => ServiceError::NotFound,
            ApiError::Validation(_) => ServiceError::Form(err.to_string()),
            other => ServiceError::Api(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
