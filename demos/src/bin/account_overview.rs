//! Demo: Account Overview
//!
//! Balances, open orders and recent fills for one pair.
//!
//! Requires C3_PUB_KEY and C3_PR_KEY in the environment.
//!
//! Run: cargo run --bin account_overview -- btc usdt

use c3_rest::{C3RestClient, Credentials};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tickers: Vec<&str> = if args.len() == 2 {
        args.iter().map(String::as_str).collect()
    } else {
        vec!["btc", "usdt"]
    };

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set C3_PUB_KEY and C3_PR_KEY to run this demo.");
            return Ok(());
        }
    };
    println!("{} Using key {}", "✓".green(), credentials.public_key());

    let client = C3RestClient::with_credentials(credentials)?;

    println!("\n{}", "  Balances".bold());
    match client.get_current_balances(&tickers).await {
        Ok(balances) if balances.is_empty() => println!("  (no wallets for these tickers)"),
        Ok(balances) => {
            for balance in &balances {
                println!(
                    "  {:<8} {}",
                    balance.currency_code.yellow(),
                    serde_json::Value::Object(balance.fields.clone())
                );
            }
        }
        Err(e) => println!("  {} {}", "✗".red(), e),
    }

    println!("\n{}", "  Open orders".bold());
    match client.get_current_orders(&tickers).await {
        Ok(orders) => print_list(&orders),
        Err(e) => println!("  {} {}", "✗".red(), e),
    }

    println!("\n{}", "  Recent fills".bold());
    match client.get_txs_history(&tickers, Some(10)).await {
        Ok(deals) => print_list(&deals),
        Err(e) => println!("  {} {}", "✗".red(), e),
    }

    Ok(())
}

fn print_list(value: &serde_json::Value) {
    match value.as_array() {
        Some(items) if items.is_empty() => println!("  (none)"),
        Some(items) => {
            for item in items {
                println!("  {} {}", "•".dimmed(), item);
            }
        }
        None => println!("  {}", value),
    }
}
