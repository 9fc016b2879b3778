//! Payments CLI
//!
//! Command-line interface for the Payments API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use payments_client::PaymentsClient;

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a payment request
    Pay {
        /// Raw request string sent as the body
        request: String,
    },
    /// Look up a payment by ID
    Get {
        /// Payment ID
        id: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = PaymentsClient::new(&cli.api_url);

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

        Commands::Pay { request } => {
            let status = client.process_payment(&request).await?;
            println!("{}", status);
        }

        Commands::Get { id } => {
            let payment = client.get_payment(&id).await?;
            println!("{}", payment);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pay() {
        let cli = Cli::parse_from(["payments", "pay", "buy widget"]);
        assert!(matches!(cli.command, Commands::Pay { ref request } if request == "buy widget"));
    }

    #[test]
    fn test_parse_get_with_api_url() {
        let cli = Cli::parse_from(["payments", "--api-url", "http://example:9000", "get", "PAY-1"]);
        assert_eq!(cli.api_url, "http://example:9000");
        assert!(matches!(cli.command, Commands::Get { ref id } if id == "PAY-1"));
    }
}
