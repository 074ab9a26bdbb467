//! YoBit API endpoint constants.

/// Base URL for the YoBit APIs.
pub const YOBIT_BASE_URL: &str = "https://yobit.net";

/// Path of the trade API. Every private call is a POST here; the body's
/// `method` field selects the operation.
pub const TRADE_API: &str = "/tapi/";

/// Public endpoints (no authentication required).
pub mod public {
    /// Exchange info: server time and pair parameters.
    pub const INFO: &str = "/api/3/info";
    /// Ticker, followed by `/{pairs}`.
    pub const TICKER: &str = "/api/3/ticker";
    /// Order book, followed by `/{pairs}`.
    pub const DEPTH: &str = "/api/3/depth";
    /// Recent trades, followed by `/{pairs}`.
    pub const TRADES: &str = "/api/3/trades";
}

/// Trade API method names, sent in the `method` body field.
pub mod methods {
    /// Account balances and key rights.
    pub const GET_INFO: &str = "getInfo";
    /// Place an order.
    pub const TRADE: &str = "Trade";
    /// List active orders for a pair.
    pub const ACTIVE_ORDERS: &str = "ActiveOrders";
    /// Get one order.
    pub const ORDER_INFO: &str = "OrderInfo";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "CancelOrder";
    /// Own trade history.
    pub const TRADE_HISTORY: &str = "TradeHistory";
    /// Deposit address for a coin.
    pub const GET_DEPOSIT_ADDRESS: &str = "GetDepositAddress";
    /// Withdraw coins to an address.
    pub const WITHDRAW_COINS_TO_ADDRESS: &str = "WithdrawCoinsToAddress";
    /// Create a YoBit code (coupon).
    pub const CREATE_YOBICODE: &str = "CreateYobicode";
    /// Redeem a YoBit code (coupon).
    pub const REDEEM_YOBICODE: &str = "RedeemYobicode";
}
