//! Client example walking a transaction through its lifecycle against a
//! running server.
//!
//! Run with: cargo run -p ledger-app --example client_example

use ledger_client::{LedgerClient, NewTransaction};
use ledger_hex::{TransactionService, inbound::HttpServer};
use ledger_repo::build_store;
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("ledger.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on port {port}...");
    println!("   Database: {db_url}");

    // Build store (handles connection and table creation)
    let store = build_store(&db_url).await?;

    // Start server in background
    let service = TransactionService::new(store);
    let server = HttpServer::new(service);
    let router = server.router();

    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    let client = LedgerClient::new(format!("http://127.0.0.1:{port}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: transaction lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let mapping = client.get_method_mapping().await?;
    println!("✅ {} registered payment methods", mapping.len());

    let salary = client
        .create_transaction(&NewTransaction {
            amount: 2500.0,
            counterparty_name: "Acme Payroll".to_string(),
            date: "2024-05-01T08:00:00.000Z".to_string(),
            note: "May salary".to_string(),
            status: "Posted".to_string(),
            ..Default::default()
        })
        .await?;
    println!(
        "✅ Created {} (method inferred: {:?})",
        salary.id, salary.method_name
    );

    let fee = client
        .create_transaction(&NewTransaction {
            amount: -19.99,
            counterparty_name: "Globex Bank".to_string(),
            date: "2024-05-17T14:02:11.000Z".to_string(),
            note: "Quarterly fee".to_string(),
            status: "Pending".to_string(),
            method_name: Some("Fee".to_string()),
            ..Default::default()
        })
        .await?;
    println!("✅ Created {} ({:?})", fee.id, fee.method_name);

    let balance = client.get_account_balance().await?;
    println!("   Balance: {balance:.2}");

    let fee = client
        .update_transaction(fee.id, None, Some("Posted"))
        .await?;
    println!("✅ Fee {} is now {}", fee.id, fee.status);

    let fees = client.list_transactions_by_method("Fee").await?;
    println!("   {} fee transaction(s)", fees.len());

    match client.list_transactions_by_method("Crypto").await {
        Ok(_) => println!("⚠️  Unknown method was accepted"),
        Err(e) => println!("✅ Unknown method rejected: {e}"),
    }

    let deleted = client.delete_transaction(salary.id).await?;
    println!("✅ Deleted {}", deleted.id);

    println!("\n📋 Remaining transactions:");
    for tx in client.list_transactions().await? {
        println!(
            "   - {} {:>10.2} {} [{}]",
            tx.id,
            tx.amount,
            tx.counterparty_name,
            tx.method_name.as_deref().unwrap_or("Unknown")
        );
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
