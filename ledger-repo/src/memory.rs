//! In-memory record store adapter.

use async_trait::async_trait;
use dashmap::DashMap;

use ledger_types::{RecordStore, ScanFilter, StoreError, Transaction, TransactionId};

/// Record store backed by a concurrent hash map.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<TransactionId, Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn put(&self, record: &Transaction) -> Result<(), StoreError> {
        self.records.insert(record.id, record.clone());
        Ok(())
    }

    async fn scan(&self, filter: Option<ScanFilter>) -> Result<Vec<Transaction>, StoreError> {
        let records = self
            .records
            .iter()
            .filter(|entry| filter.as_ref().is_none_or(|f| f.matches(entry.value())))
            .map(|entry| entry.value().clone())
            .collect();
        Ok(records)
    }

    async fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
        if self.records.remove(&id).is_none() {
            tracing::debug!(%id, "Delete of missing key");
        }
        Ok(())
    }
}
