//! Demo: Place Order
//!
//! Builds a limit order from the command line and prints the exact JSON
//! that would be signed. Nothing is sent unless `--send` is given.
//!
//! Requires C3_PUB_KEY and C3_PR_KEY in the environment when sending.
//!
//! Run: cargo run --bin place_order -- sell 0.001 45000 btc usdt [--send]

use c3_rest::{C3RestClient, Credentials, CurrencyPair, OrderSpec, PlaceOrderRequest, PriceMode};
use colored::*;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: place_order <buy|sell> <volume> <price> <base> <quote> [--send]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let send = args.iter().any(|a| a == "--send");
    args.retain(|a| a != "--send");

    let [direction, volume, price, base, quote] = args.as_slice() else {
        println!("{}", USAGE);
        return Ok(());
    };
    let tickers = [base.as_str(), quote.as_str()];

    let spec = OrderSpec::parse(direction, volume, price)?;
    let request = PlaceOrderRequest::new(
        CurrencyPair::from_tickers(&tickers)?,
        &spec,
        PriceMode::default(),
    )?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  PLACE ORDER".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();
    println!("  {} {}", "Body:".dimmed(), request.to_json()?);

    if !send {
        println!("\n{} Dry run. Pass --send to submit.", "!".yellow());
        return Ok(());
    }

    let client = C3RestClient::with_credentials(Credentials::from_env()?)?;
    match client.place_order(&tickers, &spec).await {
        Ok(response) => println!("{} {}", "✓".green(), response),
        Err(e) => println!("{} {}", "✗".red(), e),
    }

    Ok(())
}
