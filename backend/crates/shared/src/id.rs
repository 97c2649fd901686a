//! Record Id Types
//!
//! Type-safe, validated string ids for ledger records. An id is the
//! caller-chosen key of a record and is restricted to ASCII letters and
//! digits, which also keeps it free of any separator a key layout uses.

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

/// Reasons a raw string is not a usable record id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("id cannot be empty")]
    Empty,

    #[error("id may only contain letters and digits (found '{found}' at position {position})")]
    InvalidCharacter { found: char, position: usize },
}

/// The kind of record an id points at.
pub trait RecordKind {
    /// Lowercase tag used in storage keys and logs
    const TAG: &'static str;
    /// Display name used in messages
    const LABEL: &'static str;
}

/// Generic typed record id
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
///
/// type DoctorId = Id<markers::Doctor>;
/// let id = DoctorId::parse("D1").unwrap();
/// assert_eq!(id.as_str(), "D1");
/// assert!(DoctorId::parse("D-1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Validate and wrap a raw id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let value = raw.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        if let Some((position, found)) = value
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            return Err(IdError::InvalidCharacter { found, position });
        }
        Ok(Self::from_trusted(value))
    }

    /// Wrap an id read back from storage (assumed already validated).
    pub fn from_trusted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T: RecordKind> Id<T> {
    pub fn tag(&self) -> &'static str {
        T::TAG
    }

    pub fn label(&self) -> &'static str {
        T::LABEL
    }
}

impl<T: RecordKind> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Id({})", T::LABEL, self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Marker types for the record kinds kept on the ledger
pub mod markers {
    use super::RecordKind;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Doctor;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Patient;

    impl RecordKind for Doctor {
        const TAG: &'static str = "doctor";
        const LABEL: &'static str = "Doctor";
    }

    impl RecordKind for Patient {
        const TAG: &'static str = "patient";
        const LABEL: &'static str = "Patient";
    }
}

pub type DoctorId = Id<markers::Doctor>;
pub type PatientId = Id<markers::Patient>;
