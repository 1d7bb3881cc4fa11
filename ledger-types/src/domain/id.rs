//! Record identifier generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use super::transaction::TransactionId;

/// Identifiers are kept below this bound.
pub const ID_MODULUS: i64 = 1_000_000_000;

/// Produces identifiers for new transactions.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> TransactionId;
}

/// Derives identifiers from the wall clock: Unix milliseconds modulo one billion.
///
/// Two calls inside the same millisecond return the same identifier, so this
/// is not safe under concurrent creates.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockIdGenerator;

impl IdGenerator for ClockIdGenerator {
    fn next_id(&self) -> TransactionId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        TransactionId::new((millis % ID_MODULUS as u128) as i64)
    }
}

/// Draws identifiers uniformly from `1..ID_MODULUS`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> TransactionId {
        TransactionId::new(rand::rng().random_range(1..ID_MODULUS))
    }
}

/// Which generator a deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Clock,
    Random,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Clock => Box::new(ClockIdGenerator),
            IdStrategy::Random => Box::new(RandomIdGenerator),
        }
    }
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clock" => Ok(IdStrategy::Clock),
            "random" => Ok(IdStrategy::Random),
            other => Err(format!("Unknown id strategy: {other}")),
        }
    }
}
