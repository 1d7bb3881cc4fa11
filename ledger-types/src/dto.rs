//! Data Transfer Objects (DTOs) for requests and responses.

use std::collections::BTreeMap;

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::domain::TransactionId;

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a transaction.
///
/// Fields are optional at this level so that missing and empty values can be
/// rejected with a single validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTransactionRequest {
    pub amount: Option<f64>,
    pub counterparty_name: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
    pub status: Option<String>,
    /// Explicit method code; ignored when `method_name` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_code: Option<i64>,
    /// Registered method name, resolved to a code on create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
}

/// Request to update a transaction.
///
/// Only `Note` and `Status` may change. Any other field in the payload is
/// captured in `other_fields` so it can be rejected by name.
///
/// An omitted (or null) `Note` or `Status` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTransactionRequest {
    #[serde(rename = "ID")]
    pub id: TransactionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub other_fields: BTreeMap<String, serde_json::Value>,
}

impl UpdateTransactionRequest {
    /// Builds an update carrying only the mutable fields.
    pub fn new(id: TransactionId, note: Option<String>, status: Option<String>) -> Self {
        Self {
            id,
            note,
            status,
            other_fields: BTreeMap::new(),
        }
    }

    /// First field in the payload that updates are not allowed to touch.
    pub fn disallowed_field(&self) -> Option<&str> {
        self.other_fields.keys().next().map(String::as_str)
    }
}

/// Response after deleting a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct DeletedTransaction {
    #[serde(rename = "ID")]
    #[graphql(name = "ID")]
    pub id: TransactionId,
}
