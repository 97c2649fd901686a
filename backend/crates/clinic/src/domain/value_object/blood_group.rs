//! Blood Group Value Object
//!
//! Letters and digits, optionally followed by a single Rh sign
//! (`A`, `AB`, `O+`, `B-`).

use std::fmt;

use crate::domain::validation::FieldError;

const FIELD: &str = "bloodGroup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloodGroup(String);

impl BloodGroup {
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(FieldError::Empty { field: FIELD });
        }
        let group = raw.strip_suffix(['+', '-']).unwrap_or(&raw);
        if group.is_empty() {
            return Err(FieldError::NotAlphanumeric {
                field: FIELD,
                found: raw.chars().next().unwrap_or('+'),
            });
        }
        if let Some(found) = group.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(FieldError::NotAlphanumeric { field: FIELD, found });
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

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
