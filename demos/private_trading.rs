//! Example: Trade API account and order endpoints.
//!
//! Run with: cargo run --example private_trading

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use yobit_api_client::auth::Credentials;
use yobit_api_client::rest::YobitRestClient;
use yobit_api_client::rest::private::{TradeHistoryRequest, TradeRequest};
use yobit_api_client::SortOrder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match Credentials::try_from_env() {
        Some(creds) => creds,
        None => {
            println!("Set YOBIT_API_KEY and YOBIT_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let mut builder = YobitRestClient::builder().credentials(credentials);
    if let Ok(proxy) = env::var("YOBIT_PROXY") {
        builder = builder.proxy(proxy);
    }
    let client = builder.build()?;

    let info = client.get_account_info().await?;
    if !info.is_success() {
        println!("getInfo failed: {:?}", info.error);
        return Ok(());
    }
    let info = info.into_result()?;
    println!("Open orders: {}", info.open_orders);
    for (coin, amount) in info.funds.iter().filter(|(_, a)| !a.is_zero()) {
        println!("{}: {}", coin, amount);
    }

    let history = client
        .get_trade_history(&TradeHistoryRequest::new().pair("ltc_btc").count(10).order(SortOrder::Desc))
        .await?;
    println!("Recent trades: {:?}", history.result.map(|h| h.len()));

    if env::var("YOBIT_PLACE_ORDER").is_ok() {
        // Far from the market so it rests on the book.
        let request = TradeRequest::buy("ltc_btc", Decimal::from_str("0.00000100")?, Decimal::from_str("1")?);
        let placed = client.trade(&request).await?.into_result()?;
        println!("Placed order {}", placed.order_id);

        let cancelled = client.cancel_order(placed.order_id).await?.into_result()?;
        println!("Cancelled order {}", cancelled.order_id);
    } else {
        println!("Set YOBIT_PLACE_ORDER=1 to place and cancel a test order.");
    }

    Ok(())
}
