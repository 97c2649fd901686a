//! Age Value Object

use std::fmt;

use crate::domain::validation::FieldError;

/// Age in whole years.
///
/// New registrations must be strictly between 0 and 150; ages read back
/// from stored records are taken as they are, whatever older writers put
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(i64);

impl Age {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 149;

    pub fn new(years: i64) -> Result<Self, FieldError> {
        if !(Self::MIN..=Self::MAX).contains(&years) {
            return Err(FieldError::AgeOutOfRange { age: years });
        }
        Ok(Self(years))
    }

    /// Create from a stored record (not re-validated)
    pub fn from_stored(years: i64) -> Self {
        Self(years)
    }

    pub fn years(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
