//! Descriptor construction errors.

use thiserror::Error;

/// Errors raised when building a descriptor from dynamic data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("capability descriptor must be a JSON object")]
    NotAnObject,

    #[error("capability descriptor is missing a string `name` field")]
    MissingName,

    #[error("capability descriptor field `{0}` must be an array")]
    InvalidField(String),
}

/// Result type for descriptor construction.
pub type DescriptorResult<T> = Result<T, DescriptorError>;
