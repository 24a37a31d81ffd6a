//! Conformance error taxonomy.
//!
//! Every error is synchronous and fatal to the calling check; there is no
//! retry or partial success. Callers are expected to surface or log these.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by conformance checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    /// Malformed invocation: absent candidate or no descriptors supplied.
    #[error("invalid conformance check: {0}")]
    InvalidArgument(String),

    /// The candidate lacks a required invocable member.
    #[error(
        "candidate does not implement the `{capability}` capability: \
         method `{method}` was not found"
    )]
    MissingMethod { capability: String, method: String },

    /// The candidate violates a property presence/absence requirement.
    #[error(
        "candidate does not implement the `{capability}` capability: \
         property `{property}` {violation}"
    )]
    PropertyConstraint {
        capability: String,
        property: String,
        violation: PropertyViolation,
    },
}

/// Which polarity of a property requirement was violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyViolation {
    /// A `required_properties` entry with no matching member.
    MissingRequired,
    /// A `forbidden_properties` entry with a matching member.
    ForbiddenPresent,
}

impl fmt::Display for PropertyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyViolation::MissingRequired => write!(f, "was not found"),
            PropertyViolation::ForbiddenPresent => write!(f, "must not be present"),
        }
    }
}

/// Result type for conformance checks.
pub type ConformanceResult<T> = Result<T, ConformanceError>;
