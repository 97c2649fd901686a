//! Clinic Error Types
//!
//! This module provides clinic-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::ledger::LedgerError;
use crate::domain::validation::FieldError;

/// Clinic-specific result type alias
pub type ClinicResult<T> = Result<T, ClinicError>;

/// Clinic-specific error variants
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Input failed a field rule
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldError),

    /// Registration for an id that is already taken
    #[error("{kind} {id} already exists")]
    AlreadyExists { kind: &'static str, id: String },

    /// No record under this id
    #[error("{kind} {id} does not exist")]
    NotFound { kind: &'static str, id: String },

    /// Stored bytes could not be decoded, or a record could not be encoded
    #[error("Record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Gateway failure
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Invocation named a function no handler is registered for
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Invocation carried the wrong number of arguments
    #[error("{function} expects {expected} argument(s), got {actual}")]
    InvalidArguments {
        function: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ClinicError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClinicError::Validation(_)
            | ClinicError::UnknownFunction(_)
            | ClinicError::InvalidArguments { .. } => ErrorKind::InvalidArgument,
            ClinicError::AlreadyExists { .. } => ErrorKind::Conflict,
            ClinicError::NotFound { .. } => ErrorKind::NotFound,
            ClinicError::Serialization(_) => ErrorKind::CorruptState,
            ClinicError::Ledger(LedgerError::Unavailable(_)) => ErrorKind::LedgerUnavailable,
            ClinicError::Ledger(LedgerError::Rejected { .. }) => ErrorKind::Conflict,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ClinicError::AlreadyExists { .. } => {
                err.with_action("Choose a different id; registered records are never replaced.")
            }
            ClinicError::InvalidArguments { .. } | ClinicError::UnknownFunction(_) => {
                err.with_action("Check the function name and argument list.")
            }
            ClinicError::Ledger(LedgerError::Unavailable(_)) => {
                err.with_action("Retry once the ledger is reachable.")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ClinicError::Serialization(e) => {
                tracing::error!(error = %e, "Stored record could not be decoded");
            }
            ClinicError::Ledger(e) => {
                tracing::error!(error = %e, "Ledger error");
            }
            ClinicError::AlreadyExists { kind, id } => {
                tracing::warn!(kind = %kind, id = %id, "Duplicate registration attempt");
            }
            ClinicError::Validation(e) => {
                tracing::warn!(field = e.field(), error = %e, "Invalid field");
            }
            _ => {
                tracing::debug!(error = %self, "Clinic error");
            }
        }
    }
}

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        match err {
            ClinicError::Serialization(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}
