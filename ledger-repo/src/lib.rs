//! # Ledger Repository
//!
//! Concrete record store implementations (adapters) for the ledger service.
//! This crate provides the adapters that implement the `RecordStore` port.

use async_trait::async_trait;
use ledger_types::{RecordStore, ScanFilter, StoreError, Transaction, TransactionId};

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
mod types;


pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// URL selecting the in-memory store.
pub const MEMORY_URL: &str = "memory://";

/// Unified store wrapper over the available adapters.
pub enum Store {
    Memory(MemoryStore),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteStore),
}

/// Build and initialize a store from a database URL.
///
/// # Examples
///
/// ```ignore
/// let store = build_store("memory://").await?;
///
/// // SQLite (with `sqlite` feature)
/// let store = build_store("sqlite://ledger.db?mode=rwc").await?;
/// ```
pub async fn build_store(database_url: &str) -> anyhow::Result<Store> {
    Store::new(database_url).await
}

impl Store {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        if database_url == MEMORY_URL {
            tracing::info!("Using in-memory record store");
            return Ok(Store::Memory(MemoryStore::new()));
        }

        #[cfg(feature = "sqlite")]
        {
            if database_url.starts_with("sqlite:") {
                let inner = SqliteStore::new(database_url).await?;
                tracing::info!("Using SQLite record store");
                return Ok(Store::Sqlite(inner));
            }
        }

        anyhow::bail!("Unsupported database URL: {}", database_url)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Implement RecordStore for Store (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RecordStore for Store {
    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        match self {
            Store::Memory(inner) => inner.get(id).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.get(id).await,
        }
    }

    async fn put(&self, record: &Transaction) -> Result<(), StoreError> {
        match self {
            Store::Memory(inner) => inner.put(record).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.put(record).await,
        }
    }

    async fn scan(&self, filter: Option<ScanFilter>) -> Result<Vec<Transaction>, StoreError> {
        match self {
            Store::Memory(inner) => inner.scan(filter).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.scan(filter).await,
        }
    }

    async fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
        match self {
            Store::Memory(inner) => inner.delete(id).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.delete(id).await,
        }
    }

    async fn put_many(&self, records: &[Transaction]) -> Result<usize, StoreError> {
        match self {
            Store::Memory(inner) => inner.put_many(records).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.put_many(records).await,
        }
    }
}
