//! Staged Ledger
//!
//! Per-invocation write set over a shared gateway. Reads see this
//! invocation's own writes first; nothing reaches the underlying ledger
//! until [`StagedLedger::commit`]. Dropping an uncommitted stage discards
//! every write, so a failed invocation leaves the world state untouched.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::ledger::{Ledger, LedgerError, WriteMode, WriteOp};

pub struct StagedLedger<L> {
    inner: Arc<L>,
    writes: Mutex<BTreeMap<String, (Vec<u8>, WriteMode)>>,
}

impl<L> StagedLedger<L>
where
    L: Ledger + Send + Sync,
{
    pub fn new(inner: Arc<L>) -> Self {
        Self {
            inner,
            writes: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of keys written so far
    pub async fn pending(&self) -> usize {
        self.writes.lock().await.len()
    }

    /// Hand every staged write to the underlying ledger in one batch.
    /// The stage is empty afterwards, whether or not the batch was accepted.
    pub async fn commit(&self) -> Result<(), LedgerError> {
        let staged = std::mem::take(&mut *self.writes.lock().await);
        let writes: Vec<WriteOp> = staged
            .into_iter()
            .map(|(key, (value, mode))| WriteOp { key, value, mode })
            .collect();

        if writes.is_empty() {
            return Ok(());
        }
        tracing::debug!(writes = writes.len(), "Committing staged writes");
        self.inner.apply(writes).await
    }
}

impl<L> Ledger for StagedLedger<L>
where
    L: Ledger + Send + Sync,
{
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        if let Some((value, _)) = self.writes.lock().await.get(key) {
            return Ok(Some(value.clone()));
        }
        self.inner.get_state(key).await
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        let mut writes = self.writes.lock().await;
        // A key first created in this stage stays a conditional create.
        let mode = match writes.get(key) {
            Some((_, WriteMode::CreateOnly)) => WriteMode::CreateOnly,
            _ => WriteMode::Overwrite,
        };
        writes.insert(key.to_string(), (value, mode));
        Ok(())
    }

    async fn put_state_if_absent(&self, key: &str, value: Vec<u8>) -> Result<bool, LedgerError> {
        if self.get_state(key).await?.is_some() {
            return Ok(false);
        }
        self.writes
            .lock()
            .await
            .insert(key.to_string(), (value, WriteMode::CreateOnly));
        Ok(true)
    }

    async fn apply(&self, batch: Vec<WriteOp>) -> Result<(), LedgerError> {
        let mut writes = self.writes.lock().await;
        for op in batch {
            writes.insert(op.key, (op.value, op.mode));
        }
        Ok(())
    }
}
