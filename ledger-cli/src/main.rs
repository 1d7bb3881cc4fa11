//! Ledger CLI
//!
//! Command-line interface for the ledger GraphQL API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_client::{LedgerClient, NewTransaction};
use ledger_types::TransactionId;

#[derive(Parser)]
#[command(name = "ledger")]
#[command(author, version, about = "Ledger API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the ledger API
    #[arg(long, env = "LEDGER_API_URL", default_value = "http://localhost:4000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one transaction
    Get {
        /// Transaction ID
        id: String,
    },
    /// List all transactions
    List,
    /// List transactions paid with a method, e.g. "Wire"
    ByMethod {
        /// Method name
        name: String,
    },
    /// Sum of all transaction amounts
    Balance,
    /// Show the registered payment methods
    Methods,
    /// Resolve a method code to its name
    MethodName {
        /// Method code
        code: i64,
    },
    /// Record a new transaction
    Create {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        counterparty: String,
        /// ISO-8601 timestamp
        #[arg(long)]
        date: String,
        #[arg(long)]
        note: String,
        #[arg(long, default_value = "Pending")]
        status: String,
        #[arg(long)]
        method_code: Option<i64>,
        #[arg(long)]
        method_name: Option<String>,
    },
    /// Change the note and/or status of a transaction
    Update {
        /// Transaction ID
        id: String,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Check API health
    Health,
}

fn parse_transaction_id(s: &str) -> Result<TransactionId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid transaction ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = LedgerClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Get { id } => {
            let id = parse_transaction_id(&id)?;
            match client.get_transaction(id).await? {
                Some(tx) => println!("{}", serde_json::to_string_pretty(&tx)?),
                None => {
                    eprintln!("Transaction {} not found", id);
                    std::process::exit(1);
                }
            }
        }

        Commands::List => {
            let txs = client.list_transactions().await?;
            println!("{}", serde_json::to_string_pretty(&txs)?);
        }

        Commands::ByMethod { name } => {
            let txs = client.list_transactions_by_method(&name).await?;
            println!("{}", serde_json::to_string_pretty(&txs)?);
        }

        Commands::Balance => {
            let balance = client.get_account_balance().await?;
            println!("{balance:.2}");
        }

        Commands::Methods => {
            let mapping = client.get_method_mapping().await?;
            println!("{}", serde_json::to_string_pretty(&mapping)?);
        }

        Commands::MethodName { code } => {
            println!("{}", client.get_method_name(code).await?);
        }

        Commands::Create {
            amount,
            counterparty,
            date,
            note,
            status,
            method_code,
            method_name,
        } => {
            let input = NewTransaction {
                amount,
                counterparty_name: counterparty,
                date,
                note,
                status,
                method_code,
                method_name,
            };
            let tx = client.create_transaction(&input).await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }

        Commands::Update { id, note, status } => {
            let id = parse_transaction_id(&id)?;
            let tx = client
                .update_transaction(id, note.as_deref(), status.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }

        Commands::Delete { id } => {
            let id = parse_transaction_id(&id)?;
            let deleted = client.delete_transaction(id).await?;
            println!("✓ Transaction {} deleted", deleted.id);
        }
    }

    Ok(())
}
