//! # Ledger Hex
//!
//! Application service layer and GraphQL adapter for the ledger service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//! - `api/` - Object-safe operation contract the transport calls into
//! - `inbound/` - GraphQL adapter (async-graphql on Axum)
//!
//! The service is generic over `S: RecordStore`, allowing
//! different store implementations to be injected.

pub mod api;
pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use api::{LedgerApi, SharedLedger};
pub use service::TransactionService;
