//! # Ledger Types
//!
//! Domain types and port traits for the transaction ledger service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Transaction, MethodRegistry, id generators)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ClockIdGenerator, IdGenerator, IdStrategy, MethodMapping, MethodRegistry, RandomIdGenerator,
    Transaction, TransactionId,
};
pub use dto::*;
pub use error::{AppError, DomainError, StoreError};
pub use ports::{RecordStore, ScanFilter};
