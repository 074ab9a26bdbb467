//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::TradeSide;

/// Exchange info response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    /// Server time as a Unix timestamp.
    pub server_time: i64,
    /// Parameters of every listed pair, keyed by pair name.
    pub pairs: HashMap<String, PairInfo>,
}

/// Trading parameters of one pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PairInfo {
    /// Decimal places allowed for prices.
    pub decimal_places: u32,
    /// Minimum allowed price.
    pub min_price: Decimal,
    /// Maximum allowed price.
    pub max_price: Decimal,
    /// Minimum order amount.
    pub min_amount: Decimal,
    /// Minimum order total.
    #[serde(default)]
    pub min_total: Option<Decimal>,
    /// `1` if the pair is hidden.
    #[serde(default)]
    pub hidden: u8,
    /// Fee in percent.
    pub fee: Decimal,
    /// Buyer fee in percent.
    #[serde(default)]
    pub fee_buyer: Option<Decimal>,
    /// Seller fee in percent.
    #[serde(default)]
    pub fee_seller: Option<Decimal>,
}

/// Ticker information for a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerInfo {
    /// 24h high.
    pub high: Decimal,
    /// 24h low.
    pub low: Decimal,
    /// 24h average price.
    pub avg: Decimal,
    /// 24h volume in the quote currency.
    pub vol: Decimal,
    /// 24h volume in the base currency.
    pub vol_cur: Decimal,
    /// Last trade price.
    pub last: Decimal,
    /// Best bid.
    pub buy: Decimal,
    /// Best ask.
    pub sell: Decimal,
    /// Last update as a Unix timestamp.
    pub updated: i64,
}

/// One `[price, amount]` order book level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookLevel(pub Decimal, pub Decimal);

impl BookLevel {
    /// Level price.
    pub fn price(&self) -> Decimal {
        self.0
    }

    /// Amount available at this price.
    pub fn amount(&self) -> Decimal {
        self.1
    }
}

/// Order book for a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Ask levels, best first.
    #[serde(default)]
    pub asks: Vec<BookLevel>,
    /// Bid levels, best first.
    #[serde(default)]
    pub bids: Vec<BookLevel>,
}

/// A public trade.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicTrade {
    /// Whether the trade hit an ask or a bid.
    #[serde(rename = "type")]
    pub side: TradeSide,
    /// Trade price.
    pub price: Decimal,
    /// Trade amount.
    pub amount: Decimal,
    /// Trade id.
    pub tid: u64,
    /// Trade time as a Unix timestamp.
    pub timestamp: i64,
}

/// Ticker response, keyed by pair.
pub type TickerResponse = HashMap<String, TickerInfo>;
/// Depth response, keyed by pair.
pub type DepthResponse = HashMap<String, OrderBook>;
/// Trades response, keyed by pair.
pub type TradesResponse = HashMap<String, Vec<PublicTrade>>;

/// Query parameters shared by depth and trades.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LimitParams {
    /// Maximum number of entries (YoBit default 150, max 2000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_book_levels() {
        let json = r#"{"asks":[[4.5,0.2],[4.6,1]],"bids":[[4.4,3.25]]}"#;
        let book: OrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.asks.len(), 2);
        assert_eq!(book.asks[0].price(), Decimal::new(45, 1));
        assert_eq!(book.bids[0].amount(), Decimal::new(325, 2));
    }

    #[test]
    fn test_empty_order_book_side() {
        let book: OrderBook = serde_json::from_str(r#"{"asks":[[1,1]]}"#).unwrap();
        assert!(book.bids.is_empty());
    }

    #[test]
    fn test_limit_params_omitted() {
        assert_eq!(serde_urlencoded::to_string(LimitParams::default()).unwrap(), "");
        assert_eq!(
            serde_urlencoded::to_string(LimitParams { limit: Some(50) }).unwrap(),
            "limit=50"
        );
    }
}
