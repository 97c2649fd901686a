//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps every failure to the status
//! carried back across the invocation boundary.

use serde::Serialize;

/// Error classification shared by all record kinds.
///
/// Each variant maps to a response status that the invocation boundary
/// reports to its caller. Client-side kinds (4xx) mean the caller sent
/// something the core refuses; server-side kinds (5xx) mean the stored
/// state or the ledger itself is at fault.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - a field or argument failed validation
    InvalidArgument,
    /// 404 - no record is stored under the requested key
    NotFound,
    /// 409 - the key already holds a record
    Conflict,
    /// 500 - stored bytes could not be decoded
    CorruptState,
    /// 500 - anything else that went wrong inside the core
    Internal,
    /// 503 - the ledger refused or failed the read/write
    LedgerUnavailable,
}

impl ErrorKind {
    /// Response status reported for this kind.
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidArgument.status_code(), 400);
    /// assert_eq!(ErrorKind::Conflict.status_code(), 409);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidArgument => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::CorruptState | ErrorKind::Internal => 500,
            ErrorKind::LedgerUnavailable => 503,
        }
    }

    /// Short human-readable label.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "Invalid Argument",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::CorruptState => "Corrupt State",
            ErrorKind::Internal => "Internal Error",
            ErrorKind::LedgerUnavailable => "Ledger Unavailable",
        }
    }

    /// `true` for kinds caused by the stored state or the ledger (5xx).
    ///
    /// These should be logged at error level.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// `true` for kinds caused by the caller's input (4xx).
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::InvalidArgument.status_code(), 400);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::CorruptState.status_code(), 500);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
        assert_eq!(ErrorKind::LedgerUnavailable.status_code(), 503);
    }

    #[test]
    fn test_client_and_server_split() {
        assert!(ErrorKind::InvalidArgument.is_client_error());
        assert!(ErrorKind::Conflict.is_client_error());
        assert!(!ErrorKind::NotFound.is_server_error());
        assert!(ErrorKind::CorruptState.is_server_error());
        assert!(ErrorKind::LedgerUnavailable.is_server_error());
        assert!(!ErrorKind::LedgerUnavailable.is_client_error());
    }

    #[test]
    fn test_serialized_name() {
        let json = serde_json::to_string(&ErrorKind::LedgerUnavailable).unwrap();
        assert_eq!(json, "\"LEDGER_UNAVAILABLE\"");
    }
}
