//! Domain models for the ledger service.

pub mod id;
pub mod method;
pub mod transaction;

pub use id::{ClockIdGenerator, IdGenerator, IdStrategy, RandomIdGenerator};
pub use method::{INCOMING_CODE, MethodMapping, MethodRegistry, OUTGOING_CODE};
pub use transaction::{Transaction, TransactionId};
