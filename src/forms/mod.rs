//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod main;
pub mod products;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid product id")]
    InvalidProductId,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid category")]
    InvalidCategory,

    #[error("unit price must be a finite number")]
    InvalidPrice,

    #[error("invalid expiration date")]
    InvalidDate,

    #[error("invalid value: {0}")]
    Constraint(#[from] TypeConstraintError),
}
