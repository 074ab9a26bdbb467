//! Example: Fetching public market data from YoBit.
//!
//! Run with: cargo run --example public_data

use yobit_api_client::PublicResponse;
use yobit_api_client::rest::YobitRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Public endpoints need no credentials.
    let client = YobitRestClient::new()?;

    println!("=== Exchange Info ===");
    let info = client.get_info().await?.into_result()?;
    println!("Server time: {}", info.server_time);
    println!("Listed pairs: {}", info.pairs.len());

    println!("\n=== Ticker ===");
    let ticker = client.get_ticker(&["BTC_USD", "LTC_BTC"]).await?.into_result()?;
    for (pair, t) in &ticker {
        println!("{}: last={} buy={} sell={}", pair, t.last, t.buy, t.sell);
    }

    println!("\n=== Order Book (5 levels) ===");
    let depth = client.get_depth("btc_usd", Some(5)).await?.into_result()?;
    for level in &depth["btc_usd"].asks {
        println!("ask {} @ {}", level.amount(), level.price());
    }
    for level in &depth["btc_usd"].bids {
        println!("bid {} @ {}", level.amount(), level.price());
    }

    println!("\n=== Recent Trades ===");
    let trades = client.get_trades("btc_usd", Some(5)).await?.into_result()?;
    for trade in &trades["btc_usd"] {
        println!("{:?} {} @ {}", trade.side, trade.amount, trade.price);
    }

    // YoBit reports unknown pairs inside the payload, not as an HTTP error.
    println!("\n=== Unknown Pair ===");
    match client.get_ticker("no_such_pair").await? {
        PublicResponse::Data(_) => println!("unexpected data"),
        PublicResponse::Failure(failure) => println!("YoBit said: {}", failure.error),
    }

    Ok(())
}
