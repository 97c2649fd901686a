//! Error conversions and reporting
//!
//! Conversion from serde_json errors to [`AppError`], and the JSON body an
//! [`AppError`] is reported as.

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

/// Inside the core, JSON is only ever parsed from stored records, so a
/// syntax or data error means the stored state is corrupt.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::corrupt_state(format!("Stored record is unreadable: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// Reporting
// ============================================================================

impl AppError {
    /// Problem-details style body reported to the invoker.
    pub fn to_problem(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        })
    }
}
