//! Person Name Value Object
//!
//! First and last names are stored exactly as given and may only contain
//! ASCII letters: no spaces, hyphens, apostrophes or accents.

use std::fmt;

use crate::domain::validation::FieldError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Validate a name for the given field.
    pub fn new(field: &'static str, raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(FieldError::Empty { field });
        }
        if let Some(found) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(FieldError::NotAlphabetic { field, found });
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

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
