//! Fills a record store with random transactions.
//!
//! Run with: cargo run -p ledger-app --bin ledger-seed -- --count 250

use chrono::{Duration, SecondsFormat, Utc};
use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;

use ledger_repo::build_store;
use ledger_types::{MethodMapping, MethodRegistry, RecordStore, Transaction, TransactionId};

const COUNTERPARTIES: &[&str] = &[
    "Acme Payroll",
    "Globex Bank",
    "Initech",
    "Umbrella Supplies",
    "Hooli Cloud",
    "Stark Utilities",
];

const SEVEN_DAYS_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Parser)]
#[command(name = "ledger-seed", about = "Seed the ledger store with random transactions")]
struct Args {
    /// Number of transactions to generate
    #[arg(long, default_value_t = 100)]
    count: i64,

    /// Store URL
    #[arg(long, env = "DATABASE_URL", default_value = ledger_repo::MEMORY_URL)]
    database_url: String,
}

fn random_transaction<R: Rng + ?Sized>(
    rng: &mut R,
    id: i64,
    methods: &[MethodMapping],
) -> Transaction {
    let cents: i64 = rng.random_range(-100_000..=100_000);
    let amount = cents as f64 / 100.0;
    let date = Utc::now() - Duration::seconds(rng.random_range(0..SEVEN_DAYS_SECS));
    let method_code = methods
        .choose(rng)
        .map(|m| m.method_code)
        .unwrap_or_default();
    let counterparty = COUNTERPARTIES.choose(rng).copied().unwrap_or("Unknown");

    Transaction {
        id: TransactionId::new(id),
        amount,
        counterparty_name: counterparty.to_string(),
        date: date.to_rfc3339_opts(SecondsFormat::Millis, true),
        method_code,
        method_name: None,
        note: format!("Seeded transaction {id}"),
        status: if amount >= 0.0 { "Posted" } else { "Pending" }.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    if args.database_url == ledger_repo::MEMORY_URL {
        tracing::warn!("Seeding the in-memory store; records are gone when this process exits");
    }

    let store = build_store(&args.database_url).await?;
    let methods = MethodRegistry::default().all_mappings();

    let mut rng = rand::rng();
    let records: Vec<Transaction> = (1..=args.count)
        .map(|id| random_transaction(&mut rng, id, &methods))
        .collect();

    let inserted = store.put_many(&records).await?;
    tracing::info!(inserted, database_url = %args.database_url, "Seeded transactions");

    Ok(())
}
