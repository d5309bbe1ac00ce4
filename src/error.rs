//! Error types for walletwatch.
//!
//! All errors are strongly typed using thiserror. This enables pattern
//! matching on specific error conditions and provides clear error messages.
//!
//! The detection pipeline itself has no fatal error class: a notification
//! that fails the filter, carries no body, or contains no parseable amount is
//! a normal "no candidate" outcome, not an error. The types here cover input
//! invariant violations (constructing a candidate or amount that would break
//! its contract) and subscriber stream conditions (disconnect, timeout).

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation errors that occur when constructing core values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount {amount} is not positive; an emitted candidate must carry an amount > 0")]
    NonPositiveAmount {
        amount: Decimal,
    },

    #[error("Candidate description cannot be empty")]
    EmptyDescription,

    #[error("Provider package identifier cannot be empty")]
    EmptyProviderPackage,
}

/// Execution errors that occur while consuming the candidate stream.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Stream disconnected: {path}")]
    Disconnected {
        path: String,
    },

    #[error("Receive timed out after {duration_ms}ms")]
    Timeout {
        duration_ms: u64,
    },

    #[error("Notification source registration failed: {message}")]
    Registration {
        message: String,
    },
}

/// Top-level error type for walletwatch.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl WatchError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Returns true if the subscriber stream backing this error has gone away.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        matches!(self, Self::Execution(ExecutionError::Disconnected { .. }))
    }
}

/// Result type alias for walletwatch operations.
pub type WatchResult<T> = Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_non_positive_amount() {
        let err = ValidationError::NonPositiveAmount {
            amount: Decimal::ZERO,
        };
        let msg = format!("{err}");
        assert!(msg.contains("not positive"));
    }

    #[test]
    fn test_validation_error_empty_description() {
        let err = ValidationError::EmptyDescription;
        let msg = format!("{err}");
        assert!(msg.contains("description"));
    }

    #[test]
    fn test_execution_error_timeout() {
        let err = ExecutionError::Timeout { duration_ms: 5000 };
        let msg = format!("{err}");
        assert!(msg.contains("5000ms"));
    }

    #[test]
    fn test_execution_error_disconnected() {
        let err = ExecutionError::Disconnected {
            path: "transaction_stream".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("transaction_stream"));
    }

    #[test]
    fn test_watch_error_from_validation() {
        let err: WatchError = ValidationError::EmptyDescription.into();
        assert!(err.is_validation());
        assert!(!err.is_execution());
    }

    #[test]
    fn test_watch_error_from_execution() {
        let err: WatchError = ExecutionError::Timeout { duration_ms: 100 }.into();
        assert!(err.is_execution());
        assert!(!err.is_disconnected());
    }

    #[test]
    fn test_watch_error_disconnected() {
        let err: WatchError = ExecutionError::Disconnected {
            path: "transaction_stream".to_string(),
        }
        .into();
        assert!(err.is_disconnected());
    }

    #[test]
    fn test_watch_error_internal() {
        let err = WatchError::internal("unexpected state");
        let msg = format!("{err}");
        assert!(msg.contains("unexpected state"));
        assert!(!err.is_validation());
    }
}
