//! Demo: Market Snapshot
//!
//! Public data only: last price, best bid/ask, top of the book and the
//! latest trades for one pair.
//!
//! Run: cargo run --bin market_snapshot -- btc usdt

use c3_rest::{C3RestClient, Ticker};
use colored::*;
use tracing_subscriber::EnvFilter;

const BOOK_DEPTH: usize = 5;

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
    println!(
        "{}",
        format!("  MARKET SNAPSHOT  {}", tickers.join("_").to_uppercase())
            .cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = C3RestClient::new()?;

    match client.get_ticker(&tickers).await {
        Ok(ticker) => print_ticker(&ticker),
        Err(e) => println!("{} ticker: {}", "✗".red(), e),
    }
    println!();

    match client.get_current_orderbook(&tickers).await {
        Ok(book) => {
            println!("{}", "  Order book".bold());
            print_levels("ASK", &book["asks"], |s| s.red());
            print_levels("BID", &book["bids"], |s| s.green());
        }
        Err(e) => println!("{} order book: {}", "✗".red(), e),
    }
    println!();

    match client.get_current_txs(&tickers, Some(10)).await {
        Ok(trades) => {
            let count = trades.as_array().map(Vec::len).unwrap_or(0);
            println!("  {} {} recent trades", "Trades:".dimmed(), count);
            if let Some(latest) = trades.as_array().and_then(|t| t.first()) {
                println!("  {} {}", "Latest:".dimmed(), latest);
            }
        }
        Err(e) => println!("{} recent trades: {}", "✗".red(), e),
    }

    Ok(())
}

fn print_ticker(ticker: &Ticker) {
    println!("  {} {}", "LAST:".yellow(), ticker.price);
    if let Some(bid) = ticker.best_bid {
        println!("  {} {}", "BID: ".yellow(), bid);
    }
    if let Some(ask) = ticker.best_ask {
        println!("  {} {}", "ASK: ".yellow(), ask);
    }
    if let Some(spread) = ticker.spread() {
        println!("  {} {}", "SPREAD:".green(), spread);
    }
}

fn print_levels(label: &str, levels: &serde_json::Value, paint: fn(&str) -> ColoredString) {
    let Some(levels) = levels.as_array() else {
        println!("  {} no levels", paint(label));
        return;
    };
    for level in levels.iter().take(BOOK_DEPTH) {
        println!("  {} {}", paint(label), level);
    }
}
