//! Unified error types for the domain layer
//!
//! The catalog raises exactly one error of its own: argument validation
//! at construction time. A lookup that matches no row is signaled through
//! the retrieve row count, never through an error, and reader failures
//! belong to the reader's own error type.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A constructor argument was rejected before any storage access.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
