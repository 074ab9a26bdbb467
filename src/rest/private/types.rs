//! Types for trade API endpoints.
//!
//! Request structs serialize their fields in declaration order; that order is
//! the order of the signed form body.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::rest::pairs::normalize_pair;
use crate::types::serde_helpers::number_or_string;
use crate::types::{BuySell, OrderStatus, SortOrder};

/// Balances keyed by lower-case currency code.
pub type Funds = HashMap<String, Decimal>;

/// API key permissions.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct KeyRights {
    /// `1` if the key can read account info.
    #[serde(default)]
    pub info: u8,
    /// `1` if the key can trade.
    #[serde(default)]
    pub trade: u8,
    /// `1` if the key can withdraw.
    #[serde(default)]
    pub withdraw: u8,
}

/// Result of `getInfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    /// Available balances.
    #[serde(default)]
    pub funds: Funds,
    /// Balances including amounts held in open orders.
    #[serde(default)]
    pub funds_incl_orders: Funds,
    /// Permissions of the key used.
    #[serde(default)]
    pub rights: KeyRights,
    /// Number of transactions (always `0` on YoBit).
    #[serde(default)]
    pub transaction_count: u64,
    /// Number of open orders.
    #[serde(default)]
    pub open_orders: u64,
    /// Server time as a Unix timestamp.
    #[serde(default)]
    pub server_time: i64,
}

/// Request for `Trade`.
#[derive(Debug, Clone, Serialize)]
pub struct TradeRequest {
    /// Normalized pair, e.g. `ltc_btc`.
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: BuySell,
    /// Limit price.
    pub rate: Decimal,
    /// Amount in the base currency.
    pub amount: Decimal,
}

impl TradeRequest {
    /// Create a new order request.
    pub fn new(pair: &str, side: BuySell, rate: Decimal, amount: Decimal) -> Self {
        Self {
            pair: normalize_pair(pair),
            side,
            rate,
            amount,
        }
    }

    /// A buy order.
    pub fn buy(pair: &str, rate: Decimal, amount: Decimal) -> Self {
        Self::new(pair, BuySell::Buy, rate, amount)
    }

    /// A sell order.
    pub fn sell(pair: &str, rate: Decimal, amount: Decimal) -> Self {
        Self::new(pair, BuySell::Sell, rate, amount)
    }
}

/// Result of `Trade`.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeResult {
    /// Amount bought or sold immediately.
    pub received: Decimal,
    /// Amount left on the book.
    pub remains: Decimal,
    /// Id of the resting order, `0` if fully filled.
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub order_id: u64,
    /// Balances after the trade.
    #[serde(default)]
    pub funds: Funds,
}

/// An order as returned by `ActiveOrders` and `OrderInfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Pair name.
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: BuySell,
    /// Remaining amount (`OrderInfo` also reports `start_amount`).
    pub amount: Decimal,
    /// Original amount, reported by `OrderInfo`.
    #[serde(default)]
    pub start_amount: Option<Decimal>,
    /// Limit price.
    pub rate: Decimal,
    /// Creation time as a Unix timestamp.
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub timestamp_created: i64,
    /// Order status.
    pub status: OrderStatus,
}

/// Orders keyed by order id.
pub type Orders = HashMap<String, Order>;

/// Result of `CancelOrder`.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResult {
    /// Id of the cancelled order.
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub order_id: u64,
    /// Balances after cancellation.
    #[serde(default)]
    pub funds: Funds,
}

/// Request for `TradeHistory`. Every field is optional and left out of the
/// body when unset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradeHistoryRequest {
    /// Number of the trade to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    /// Number of trades to return (YoBit default 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Trade id to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    /// Trade id to stop at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_id: Option<u64>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Start time as a Unix timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// End time as a Unix timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Normalized pair filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
}

impl TradeHistoryRequest {
    /// Create an empty request; YoBit applies its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given trade number.
    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// Limit the number of trades.
    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Start from the given trade id.
    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }

    /// Stop at the given trade id.
    pub fn end_id(mut self, end_id: u64) -> Self {
        self.end_id = Some(end_id);
        self
    }

    /// Set the sort direction.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Only trades at or after this Unix timestamp.
    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }

    /// Only trades at or before this Unix timestamp.
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Restrict to one pair.
    pub fn pair(mut self, pair: &str) -> Self {
        self.pair = Some(normalize_pair(pair));
        self
    }
}

/// An own trade from `TradeHistory`.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnTrade {
    /// Pair name.
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: BuySell,
    /// Traded amount.
    pub amount: Decimal,
    /// Trade price.
    pub rate: Decimal,
    /// Id of the order that traded.
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub order_id: u64,
    /// `1` if the order was the maker.
    #[serde(default)]
    pub is_your_order: u8,
    /// Trade time as a Unix timestamp.
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub timestamp: i64,
}

/// Own trades keyed by trade id.
pub type TradeHistory = HashMap<String, OwnTrade>;

/// Result of `GetDepositAddress`.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// Deposit address.
    pub address: String,
    /// Amount received so far.
    #[serde(default)]
    pub processed_amount: Option<Decimal>,
    /// Server time as a Unix timestamp.
    #[serde(default)]
    pub server_time: i64,
}

/// Request for `WithdrawCoinsToAddress`.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawRequest {
    /// Coin code, e.g. `BTC`.
    #[serde(rename = "coinName")]
    pub coin_name: String,
    /// Amount to withdraw.
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
}

impl WithdrawRequest {
    /// Create a new withdrawal request.
    pub fn new(coin_name: impl Into<String>, amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            coin_name: coin_name.into(),
            amount,
            address: address.into(),
        }
    }
}

/// Result of `WithdrawCoinsToAddress`.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawResult {
    /// Server time as a Unix timestamp.
    #[serde(default)]
    pub server_time: i64,
}

/// Result of `CreateYobicode`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedCoupon {
    /// The coupon code.
    pub coupon: String,
    /// Transaction id.
    #[serde(rename = "transID", deserialize_with = "number_or_string::deserialize")]
    pub trans_id: u64,
    /// Balances after creation.
    #[serde(default)]
    pub funds: Funds,
}

/// Result of `RedeemYobicode`.
#[derive(Debug, Clone, Deserialize)]
pub struct RedeemedCoupon {
    /// Amount credited.
    #[serde(rename = "couponAmount")]
    pub coupon_amount: Decimal,
    /// Currency credited.
    #[serde(rename = "couponCurrency")]
    pub coupon_currency: String,
    /// Transaction id.
    #[serde(rename = "transID", deserialize_with = "number_or_string::deserialize")]
    pub trans_id: u64,
    /// Balances after redemption.
    #[serde(default)]
    pub funds: Funds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_trade_request_encoding() {
        let request = TradeRequest::buy("LTC_BTC", Decimal::new(25, 3), Decimal::new(15, 1));
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "pair=ltc_btc&type=buy&rate=0.025&amount=1.5"
        );
    }

    #[test]
    fn test_empty_history_request_encodes_nothing() {
        assert_eq!(
            serde_urlencoded::to_string(TradeHistoryRequest::new()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_history_request_field_order() {
        let request = TradeHistoryRequest::new()
            .pair("DOGE_BTC")
            .order(SortOrder::Asc)
            .count(50)
            .since(1_700_000_000);
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "count=50&order=ASC&since=1700000000&pair=doge_btc"
        );
    }

    #[test]
    fn test_withdraw_request_encoding() {
        let request = WithdrawRequest::new("BTC", Decimal::new(1, 1), "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "coinName=BTC&amount=0.1&address=1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
        );
    }

    #[test]
    fn test_funds_keep_all_decimal_digits() {
        let json = r#"{
            "funds": {"doge": 123456789.12345678, "btc": 0.00000001},
            "funds_incl_orders": {"doge": 123456789.12345678},
            "rights": {"info": 1, "trade": 1, "withdraw": 0},
            "transaction_count": 0,
            "open_orders": 1,
            "server_time": 1700000000
        }"#;
        let info: AccountInfo = serde_json::from_str(json).unwrap();
        assert_eq!(
            info.funds["doge"],
            Decimal::from_str("123456789.12345678").unwrap()
        );
        assert_eq!(info.funds["btc"], Decimal::new(1, 8));
        assert_eq!(info.funds_incl_orders["doge"].to_string(), "123456789.12345678");
    }

    #[test]
    fn test_trade_result_keeps_all_decimal_digits() {
        let json = r#"{
            "received": 98765432.87654321,
            "remains": 0,
            "order_id": 0,
            "funds": {"doge": 123456789.12345678}
        }"#;
        let result: TradeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.received, Decimal::from_str("98765432.87654321").unwrap());
        assert_eq!(result.funds["doge"], Decimal::from_str("123456789.12345678").unwrap());
    }

    #[test]
    fn test_private_pair_is_trimmed_and_lowercased() {
        let request = TradeRequest::sell(" DOGE_BTC ", Decimal::new(2, 7), Decimal::new(1000, 0));
        assert_eq!(request.pair, "doge_btc");
        assert_eq!(
            TradeHistoryRequest::new().pair("Eth_Btc").pair,
            Some("eth_btc".to_string())
        );
    }

    #[test]
    fn test_order_with_string_timestamp() {
        let json = r#"{
            "pair": "ltc_btc",
            "type": "sell",
            "amount": 1.5,
            "rate": 0.025,
            "timestamp_created": "1418654530",
            "status": 0
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.side, BuySell::Sell);
        assert_eq!(order.timestamp_created, 1418654530);
        assert_eq!(order.status, OrderStatus::Active);
        assert!(order.start_amount.is_none());
    }
}
