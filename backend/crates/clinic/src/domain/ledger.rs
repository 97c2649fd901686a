//! Ledger Gateway
//!
//! Abstract key-value world state the records live in. The host ledger
//! owns durability, replication and ordering; the core only reads and
//! writes bytes under string keys within one invocation.

use thiserror::Error;

/// Failures reported by a ledger gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The gateway could not be reached or refused to serve the call
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// A write was refused; nothing from the same batch was applied
    #[error("Ledger rejected write to '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

/// How a staged write treats a key that already holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace whatever is there
    Overwrite,
    /// Only write if the key is empty; otherwise reject the batch
    CreateOnly,
}

/// One pending write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOp {
    pub key: String,
    pub value: Vec<u8>,
    pub mode: WriteMode,
}

impl WriteOp {
    pub fn overwrite(key: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            value,
            mode: WriteMode::Overwrite,
        }
    }

    pub fn create_only(key: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            value,
            mode: WriteMode::CreateOnly,
        }
    }
}

/// Ledger gateway trait
#[trait_variant::make(Ledger: Send)]
pub trait LocalLedger {
    /// Read the value stored under `key`
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Store `value` only if `key` is empty. Returns `false`, and writes
    /// nothing, when the key already holds a value.
    async fn put_state_if_absent(&self, key: &str, value: Vec<u8>) -> Result<bool, LedgerError>;

    /// Apply a batch of writes all-or-nothing
    async fn apply(&self, writes: Vec<WriteOp>) -> Result<(), LedgerError>;
}
