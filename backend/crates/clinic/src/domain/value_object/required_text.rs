//! Required Text Value Object
//!
//! Free text whose only rule is that it is not empty (address, visit
//! details). Content is kept verbatim.

use std::fmt;

use crate::domain::validation::FieldError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn new(field: &'static str, raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(FieldError::Empty { field });
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

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
