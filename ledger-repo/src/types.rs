//! Database row types.

use sqlx::FromRow;

use ledger_types::{StoreError, Transaction, TransactionId};

/// Transaction row from database.
#[derive(FromRow)]
pub struct DbTransaction {
    pub id: i64,
    pub amount: f64,
    pub counterparty_name: String,
    pub date: String,
    pub method_code: i64,
    pub method_name: Option<String>,
    pub note: String,
    pub status: String,
}

impl From<DbTransaction> for Transaction {
    fn from(row: DbTransaction) -> Self {
        Transaction {
            id: TransactionId::new(row.id),
            amount: row.amount,
            counterparty_name: row.counterparty_name,
            date: row.date,
            method_code: row.method_code,
            method_name: row.method_name,
            note: row.note,
            status: row.status,
        }
    }
}

/// Maps a driver error onto the store error taxonomy.
pub fn store_err(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StoreError::Corrupt(err.to_string())
        }
        other => StoreError::Database(other.to_string()),
    }
}
