//! Public REST API endpoints (no authentication required).
//!
//! These never attach credentials or consume a nonce. Every method returns a
//! [`PublicResponse`], which holds either the payload or YoBit's own failure
//! object; checking it is up to the caller.

mod types;

pub use types::*;

use crate::error::YobitError;
use crate::rest::YobitRestClient;
use crate::rest::endpoints::public;
use crate::rest::pairs::PairList;
use crate::types::PublicResponse;

impl YobitRestClient {
    /// Get server time and the trading parameters of every pair.
    pub async fn get_info(&self) -> Result<PublicResponse<ExchangeInfo>, YobitError> {
        self.public_get(public::INFO).await
    }

    /// Get ticker information for one or more pairs.
    ///
    /// # Arguments
    ///
    /// * `pairs` - A pair (`"btc_usd"`) or a list of pairs (`&["btc_usd", "ltc_btc"]`).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yobit_api_client::rest::YobitRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = YobitRestClient::new()?;
    ///     let ticker = client.get_ticker(&["BTC_USD", "LTC_BTC"]).await?.into_result()?;
    ///     println!("BTC last: {}", ticker["btc_usd"].last);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker<P>(
        &self,
        pairs: &P,
    ) -> Result<PublicResponse<TickerResponse>, YobitError>
    where
        P: PairList + ?Sized,
    {
        let endpoint = format!("{}/{}", public::TICKER, pairs.to_pair_string());
        self.public_get(&endpoint).await
    }

    /// Get the order book for one or more pairs.
    ///
    /// # Arguments
    ///
    /// * `pairs` - A pair or a list of pairs.
    /// * `limit` - Maximum number of levels per side; YoBit's default when `None`.
    pub async fn get_depth<P>(
        &self,
        pairs: &P,
        limit: Option<u32>,
    ) -> Result<PublicResponse<DepthResponse>, YobitError>
    where
        P: PairList + ?Sized,
    {
        let endpoint = format!("{}/{}", public::DEPTH, pairs.to_pair_string());
        self.public_get_with_params(&endpoint, &LimitParams { limit })
            .await
    }

    /// Get recent trades for one or more pairs.
    ///
    /// # Arguments
    ///
    /// * `pairs` - A pair or a list of pairs.
    /// * `limit` - Maximum number of trades per pair; YoBit's default when `None`.
    pub async fn get_trades<P>(
        &self,
        pairs: &P,
        limit: Option<u32>,
    ) -> Result<PublicResponse<TradesResponse>, YobitError>
    where
        P: PairList + ?Sized,
    {
        let endpoint = format!("{}/{}", public::TRADES, pairs.to_pair_string());
        self.public_get_with_params(&endpoint, &LimitParams { limit })
            .await
    }
}
