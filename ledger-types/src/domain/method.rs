//! Payment method registry.
//!
//! Maps numeric method codes to human-readable names and back, and infers a
//! code for transactions created without one.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Code assigned to unlabeled transactions with a positive amount.
pub const INCOMING_CODE: i64 = 90;
/// Code assigned to unlabeled transactions with a zero or negative amount.
pub const OUTGOING_CODE: i64 = 91;

const INCOMING_NAME: &str = "Incoming";
const OUTGOING_NAME: &str = "Outgoing";
const UNKNOWN_NAME: &str = "Unknown";

/// The registered payment methods, in listing order.
const KNOWN_METHODS: &[(i64, &str)] = &[
    (12, "Card Purchase"),
    (34, "ACH"),
    (56, "Wire"),
    (78, "Fee"),
];

/// A single `(code, name)` entry of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "PascalCase")]
#[graphql(rename_fields = "PascalCase")]
pub struct MethodMapping {
    pub method_code: i64,
    pub method_name: String,
}

/// Read-only code/name mapping for payment methods.
#[derive(Debug, Clone, Copy)]
pub struct MethodRegistry {
    entries: &'static [(i64, &'static str)],
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self {
            entries: KNOWN_METHODS,
        }
    }
}

impl MethodRegistry {
    /// Creates the registry with the built-in payment methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `code` in the registered methods only.
    pub fn registered_name(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// Returns the display name for a method code.
    ///
    /// Every unregistered code other than 90 maps to "Outgoing", not just 91.
    /// A missing code maps to "Unknown".
    pub fn name_for_code(&self, code: Option<i64>) -> &'static str {
        let Some(code) = code else {
            return UNKNOWN_NAME;
        };

        match self.registered_name(code) {
            Some(name) => name,
            None if code == INCOMING_CODE => INCOMING_NAME,
            None => OUTGOING_NAME,
        }
    }

    /// Resolves a registered method name to its code.
    ///
    /// The inferred names ("Incoming", "Outgoing") are not resolvable.
    pub fn code_for_name(&self, name: &str) -> Result<i64, DomainError> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(code, _)| *code)
            .ok_or_else(|| DomainError::InvalidMethodName(name.to_string()))
    }

    /// Picks a method code from the sign of `amount`. Zero counts as outgoing.
    pub fn infer_code_for_amount(&self, amount: f64) -> i64 {
        if amount > 0.0 {
            INCOMING_CODE
        } else {
            OUTGOING_CODE
        }
    }

    /// All registered methods, in registration order.
    pub fn all_mappings(&self) -> Vec<MethodMapping> {
        self.entries
            .iter()
            .map(|(code, name)| MethodMapping {
                method_code: *code,
                method_name: (*name).to_string(),
            })
            .collect()
    }
}
