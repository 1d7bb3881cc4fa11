//! SQLite record store adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use ledger_types::{RecordStore, ScanFilter, StoreError, Transaction, TransactionId};

use crate::types::{DbTransaction, store_err};

const SELECT_COLUMNS: &str = "SELECT id, amount, counterparty_name, date, method_code, method_name, note, status FROM transactions";

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite record store implementation.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store, creating the table if needed.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self { pool };
        store.create_schema().await?;
        Ok(store)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the transactions table if it does not exist.
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        let ddl = include_str!("../migrations/0001_create_transactions.sql");
        sqlx::raw_sql(ddl)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RecordStore for SqliteStore {
    async fn get(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        let row: Option<DbTransaction> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(store_err)?;

        Ok(row.map(Transaction::from))
    }

    async fn put(&self, record: &Transaction) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO transactions (id, amount, counterparty_name, date, method_code, method_name, note, status)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   amount = excluded.amount,
                   counterparty_name = excluded.counterparty_name,
                   date = excluded.date,
                   method_code = excluded.method_code,
                   method_name = excluded.method_name,
                   note = excluded.note,
                   status = excluded.status"#,
        )
        .bind(record.id.value())
        .bind(record.amount)
        .bind(&record.counterparty_name)
        .bind(&record.date)
        .bind(record.method_code)
        .bind(&record.method_name)
        .bind(&record.note)
        .bind(&record.status)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        tracing::debug!(id = %record.id, "Stored transaction row");
        Ok(())
    }

    async fn scan(&self, filter: Option<ScanFilter>) -> Result<Vec<Transaction>, StoreError> {
        let rows: Vec<DbTransaction> = match filter {
            None => sqlx::query_as(SELECT_COLUMNS)
                .fetch_all(&self.pool)
                .await
                .map_err(store_err)?,
            Some(ScanFilter::MethodCode(code)) => {
                sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE method_code = ?"))
                    .bind(code)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(store_err)?
            }
        };

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        tracing::debug!(%id, rows = result.rows_affected(), "Deleted transaction row");
        Ok(())
    }
}
