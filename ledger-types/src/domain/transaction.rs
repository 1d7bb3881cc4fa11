//! Transaction domain model.

use async_graphql::{NewType, SimpleObject};
use serde::{Deserialize, Serialize};

/// Unique identifier for a Transaction.
///
/// Exposed on the wire as a plain integer. The GraphQL derive also provides
/// the `From` conversions to and from `i64`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, NewType,
)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Creates a TransactionId from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A ledger transaction record.
///
/// `method_name` is a derived label. Whatever a store hands back in that field
/// is overwritten from `method_code` before the record leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "PascalCase")]
#[graphql(rename_fields = "PascalCase")]
pub struct Transaction {
    /// Unique identifier
    #[serde(rename = "ID")]
    #[graphql(name = "ID")]
    pub id: TransactionId,
    /// Signed amount; positive values are incoming
    pub amount: f64,
    /// The other side of the transaction
    pub counterparty_name: String,
    /// ISO-8601 timestamp
    pub date: String,
    /// Numeric payment-method classifier
    pub method_code: i64,
    /// Human-readable label for `method_code`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    /// Free-form note, mutable
    pub note: String,
    /// Processing status, mutable
    pub status: String,
}

impl Transaction {
    /// Replaces the Note and Status of this record, leaving every other field alone.
    ///
    /// `None` keeps the current value.
    pub fn apply_patch(&mut self, note: Option<String>, status: Option<String>) {
        if let Some(note) = note {
            self.note = note;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}
