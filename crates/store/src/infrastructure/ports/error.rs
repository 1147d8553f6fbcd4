//! Error types for reader port operations.

/// Failures raised by a reader implementation.
///
/// The record layer never constructs or catches these; a reader error
/// passes through a retrieve call untranslated. "No matching row" is not
/// an error - readers signal it with `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Storage operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A fetched row could not be decoded into columns.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The backing store cannot be reached.
    #[error("Storage unavailable")]
    Unavailable,
}

impl ReadError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Decode error.
    pub fn decode(message: impl ToString) -> Self {
        Self::Decode(message.to_string())
    }
}
