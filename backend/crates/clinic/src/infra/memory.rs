//! In-Memory Ledger
//!
//! World state held in a map behind an async lock. Backs the `invoke`
//! binary and the tests; every call is atomic with respect to the others.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::ledger::{Ledger, LedgerError, WriteMode, WriteOp};

#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the whole world state
    pub async fn snapshot(&self) -> HashMap<String, Vec<u8>> {
        self.state.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }
}

impl Ledger for InMemoryLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.state.read().await.get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.state.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn put_state_if_absent(&self, key: &str, value: Vec<u8>) -> Result<bool, LedgerError> {
        let mut state = self.state.write().await;
        if state.contains_key(key) {
            return Ok(false);
        }
        state.insert(key.to_string(), value);
        Ok(true)
    }

    async fn apply(&self, writes: Vec<WriteOp>) -> Result<(), LedgerError> {
        let mut state = self.state.write().await;

        if let Some(taken) = writes
            .iter()
            .find(|w| w.mode == WriteMode::CreateOnly && state.contains_key(&w.key))
        {
            return Err(LedgerError::Rejected {
                key: taken.key.clone(),
                reason: "key already holds a value".to_string(),
            });
        }

        for write in writes {
            state.insert(write.key, write.value);
        }
        Ok(())
    }
}
