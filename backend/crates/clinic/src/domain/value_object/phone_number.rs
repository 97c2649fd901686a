//! Phone Number Value Object

use std::fmt;

use crate::domain::validation::FieldError;

/// Number of ASCII digits in every phone-type field
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Phone number of exactly ten ASCII digits. No prefix, spaces or
/// separators are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(field: &'static str, raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(FieldError::Empty { field });
        }
        if raw.len() != PHONE_NUMBER_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::NotTenDigits { field });
        }
        Ok(Self(raw))
    }

    /// Create from a stored record (assumed already validated)
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
