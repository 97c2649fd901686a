//! Storage Key Layout
//!
//! Maps a record id to the ledger key it is stored under.

use std::fmt;
use std::str::FromStr;

use kernel::id::RecordKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key layout '{0}' (expected 'namespaced' or 'legacy')")]
pub struct KeyLayoutError(String);

/// How record ids map to ledger keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyLayout {
    /// `"{kind}:{id}"`; doctors and patients live in separate keyspaces
    #[default]
    Namespaced,
    /// The raw id; doctors and patients share one keyspace
    Legacy,
}

impl KeyLayout {
    /// Ledger key for the record of kind `T` with this id.
    pub fn key<T: RecordKind>(&self, id: &str) -> String {
        match self {
            KeyLayout::Namespaced => format!("{}:{}", T::TAG, id),
            KeyLayout::Legacy => id.to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyLayout::Namespaced => "namespaced",
            KeyLayout::Legacy => "legacy",
        }
    }
}

impl FromStr for KeyLayout {
    type Err = KeyLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "namespaced" => Ok(KeyLayout::Namespaced),
            "legacy" => Ok(KeyLayout::Legacy),
            _ => Err(KeyLayoutError(s.to_string())),
        }
    }
}

impl fmt::Display for KeyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
