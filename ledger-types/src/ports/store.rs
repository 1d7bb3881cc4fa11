//! Record store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (in-memory, SQLite) implement this trait.

use crate::domain::{Transaction, TransactionId};
use crate::error::StoreError;

/// Equality predicate on a single record attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanFilter {
    MethodCode(i64),
}

impl ScanFilter {
    /// Returns true when `record` satisfies the predicate.
    pub fn matches(&self, record: &Transaction) -> bool {
        match self {
            ScanFilter::MethodCode(code) => record.method_code == *code,
        }
    }
}

/// Key-value table of transaction records keyed by ID.
///
/// Each call is atomic on its own; nothing spans multiple calls.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Gets a record by key.
    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError>;

    /// Inserts or replaces the record stored under `record.id`.
    async fn put(&self, record: &Transaction) -> Result<(), StoreError>;

    /// Returns every record, or only those matching `filter`. Order is unspecified.
    async fn scan(&self, filter: Option<ScanFilter>) -> Result<Vec<Transaction>, StoreError>;

    /// Removes a record. Deleting a missing key is not an error.
    async fn delete(&self, id: TransactionId) -> Result<(), StoreError>;

    /// Bulk insert used for seeding. Returns the number of records written.
    async fn put_many(&self, records: &[Transaction]) -> Result<usize, StoreError> {
        for record in records {
            self.put(record).await?;
        }
        Ok(records.len())
    }
}
