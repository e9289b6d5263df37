//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
