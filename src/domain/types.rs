//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, trimmed
//! non-empty names) on values entered by the user. Names read back from the
//! backend are taken as stored.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is longer than allowed.
    #[error("value is longer than {0} characters")]
    TooLong(usize),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Macro to generate trimmed, non-empty, length-limited string newtypes.
macro_rules! name_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(into = "String")]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters accepted.
            pub const MAX_LEN: usize = $max;

            /// Trims the input and rejects empty or oversized values.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                if trimmed.chars().count() > Self::MAX_LEN {
                    return Err(TypeConstraintError::TooLong(Self::MAX_LEN));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Wraps a value already stored by the backend without applying
            /// the input limits.
            pub fn from_stored<S: Into<String>>(value: S) -> Self {
                Self(value.into())
            }

            /// Borrow the value as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the owned inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                String::deserialize(deserializer).map(Self::from_stored)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ProductId, "Backend-assigned identifier of a product.");
name_newtype!(ProductName, 120, "Display name of a product.");
name_newtype!(CategoryName, 60, "Category a product belongs to.");
