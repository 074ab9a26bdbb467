//! # YoBit Client
//!
//! An async Rust client library for the YoBit exchange public and trade APIs.
//!
//! ## Features
//!
//! - Public market data: exchange info, ticker, depth, trades
//! - Signed trade API: balances, orders, history, deposits, withdrawals, YoBit codes
//! - Pluggable, async nonce update policies with per-client serialization
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yobit_api_client::rest::YobitRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YobitRestClient::new()?;
//!     let depth = client.get_depth("btc_usd", Some(10)).await?;
//!     println!("Depth: {:?}", depth);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, YobitError};
pub use rest::{YobitClient, YobitRestClient};
pub use types::{ApiResponse, BuySell, OrderStatus, PublicResponse, SortOrder};

/// Result type alias using YobitError
pub type Result<T> = std::result::Result<T, YobitError>;
