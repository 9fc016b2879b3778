//! Client example demonstrating the payment flow against a running server.
//!
//! Run with: cargo run -p payments-app --example client_example

use payments_client::PaymentsClient;
use payments_hex::{PaymentService, PaymentValidator, inbound::HttpServer};
use payments_repo::{EmailNotifier, RepositoryMode, build_repo};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind first so the port is ours before the client connects
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    println!("🚀 Starting server on {addr}...");

    // In-memory repository so lookups see what was saved
    let repo = build_repo(RepositoryMode::InMemory);
    let service = PaymentService::new(repo, EmailNotifier::new(), PaymentValidator::new());
    let router = HttpServer::new(service).router();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = PaymentsClient::new(format!("http://{addr}"));

    println!("\n🩺 Health: {}", client.health().await?);

    let status = client.process_payment("buy widget").await?;
    println!("\n💳 Processed payment: {status}");

    match client.process_payment("").await {
        Ok(status) => println!("\n⚠️  Empty request unexpectedly accepted: {status}"),
        Err(e) => println!("\n❌ Empty request rejected: {e}"),
    }

    let missing = client.get_payment("PAY-0").await?;
    println!("\n🔍 Lookup of unknown id: {missing}");

    Ok(())
}
