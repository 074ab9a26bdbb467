//! Trait definition for the YoBit REST API client.
//!
//! [`YobitClient`] abstracts every public and trade API operation so that
//! strategies can be written against a mock or a decorated client.
//!
//! # Example
//!
//! ```rust,ignore
//! use yobit_api_client::rest::{YobitClient, YobitRestClient};
//!
//! async fn last_price<C: YobitClient>(client: &C) -> Result<(), yobit_api_client::YobitError> {
//!     let ticker = client.get_ticker("btc_usd").await?.into_result()?;
//!     println!("Last: {}", ticker["btc_usd"].last);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::YobitError;
use crate::rest::YobitRestClient;
use crate::rest::pairs::PairList;
use crate::rest::private::{
    AccountInfo, CancelOrderResult, CreatedCoupon, DepositAddress, Orders, RedeemedCoupon,
    TradeHistory, TradeHistoryRequest, TradeRequest, TradeResult, WithdrawRequest, WithdrawResult,
};
use crate::rest::public::{DepthResponse, ExchangeInfo, TickerResponse, TradesResponse};
use crate::types::{ApiResponse, PublicResponse};

/// Trait defining all YoBit REST API operations.
///
/// All methods are async and return `Result<T, YobitError>`.
pub trait YobitClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get server time and pair parameters.
    fn get_info(
        &self,
    ) -> impl Future<Output = Result<PublicResponse<ExchangeInfo>, YobitError>> + Send;

    /// Get ticker information for one or more pairs.
    fn get_ticker<P: PairList + Sync + ?Sized>(
        &self,
        pairs: &P,
    ) -> impl Future<Output = Result<PublicResponse<TickerResponse>, YobitError>> + Send;

    /// Get the order book for one or more pairs.
    fn get_depth<P: PairList + Sync + ?Sized>(
        &self,
        pairs: &P,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<PublicResponse<DepthResponse>, YobitError>> + Send;

    /// Get recent trades for one or more pairs.
    fn get_trades<P: PairList + Sync + ?Sized>(
        &self,
        pairs: &P,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<PublicResponse<TradesResponse>, YobitError>> + Send;

    // ========== Trade API ==========

    /// Get balances and key rights.
    fn get_account_info(
        &self,
    ) -> impl Future<Output = Result<ApiResponse<AccountInfo>, YobitError>> + Send;

    /// Place a limit order.
    fn trade(
        &self,
        request: &TradeRequest,
    ) -> impl Future<Output = Result<ApiResponse<TradeResult>, YobitError>> + Send;

    /// List active orders for one pair.
    fn get_active_orders(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<ApiResponse<Orders>, YobitError>> + Send;

    /// Get one order by id.
    fn get_order_info(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<ApiResponse<Orders>, YobitError>> + Send;

    /// Cancel an order by id.
    fn cancel_order(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<ApiResponse<CancelOrderResult>, YobitError>> + Send;

    /// Get own trade history.
    fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> impl Future<Output = Result<ApiResponse<TradeHistory>, YobitError>> + Send;

    /// Get the deposit address for a coin.
    fn get_deposit_address(
        &self,
        coin_name: &str,
        need_new: Option<bool>,
    ) -> impl Future<Output = Result<ApiResponse<DepositAddress>, YobitError>> + Send;

    /// Withdraw coins to an external address.
    fn withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> impl Future<Output = Result<ApiResponse<WithdrawResult>, YobitError>> + Send;

    /// Create a YoBit code (coupon).
    fn create_coupon(
        &self,
        currency: &str,
        amount: Decimal,
    ) -> impl Future<Output = Result<ApiResponse<CreatedCoupon>, YobitError>> + Send;

    /// Redeem a YoBit code (coupon).
    fn redeem_coupon(
        &self,
        coupon: &str,
    ) -> impl Future<Output = Result<ApiResponse<RedeemedCoupon>, YobitError>> + Send;
}

impl YobitClient for YobitRestClient {
    async fn get_info(&self) -> Result<PublicResponse<ExchangeInfo>, YobitError> {
        YobitRestClient::get_info(self).await
    }

    async fn get_ticker<P: PairList + Sync + ?Sized>(
        &self,
        pairs: &P,
    ) -> Result<PublicResponse<TickerResponse>, YobitError> {
        YobitRestClient::get_ticker(self, pairs).await
    }

    async fn get_depth<P: PairList + Sync + ?Sized>(
        &self,
        pairs: &P,
        limit: Option<u32>,
    ) -> Result<PublicResponse<DepthResponse>, YobitError> {
        YobitRestClient::get_depth(self, pairs, limit).await
    }

    async fn get_trades<P: PairList + Sync + ?Sized>(
        &self,
        pairs: &P,
        limit: Option<u32>,
    ) -> Result<PublicResponse<TradesResponse>, YobitError> {
        YobitRestClient::get_trades(self, pairs, limit).await
    }

    async fn get_account_info(&self) -> Result<ApiResponse<AccountInfo>, YobitError> {
        YobitRestClient::get_account_info(self).await
    }

    async fn trade(&self, request: &TradeRequest) -> Result<ApiResponse<TradeResult>, YobitError> {
        YobitRestClient::trade(self, request).await
    }

    async fn get_active_orders(&self, pair: &str) -> Result<ApiResponse<Orders>, YobitError> {
        YobitRestClient::get_active_orders(self, pair).await
    }

    async fn get_order_info(&self, order_id: u64) -> Result<ApiResponse<Orders>, YobitError> {
        YobitRestClient::get_order_info(self, order_id).await
    }

    async fn cancel_order(
        &self,
        order_id: u64,
    ) -> Result<ApiResponse<CancelOrderResult>, YobitError> {
        YobitRestClient::cancel_order(self, order_id).await
    }

    async fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<ApiResponse<TradeHistory>, YobitError> {
        YobitRestClient::get_trade_history(self, request).await
    }

    async fn get_deposit_address(
        &self,
        coin_name: &str,
        need_new: Option<bool>,
    ) -> Result<ApiResponse<DepositAddress>, YobitError> {
        YobitRestClient::get_deposit_address(self, coin_name, need_new).await
    }

    async fn withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> Result<ApiResponse<WithdrawResult>, YobitError> {
        YobitRestClient::withdraw(self, request).await
    }

    async fn create_coupon(
        &self,
        currency: &str,
        amount: Decimal,
    ) -> Result<ApiResponse<CreatedCoupon>, YobitError> {
        YobitRestClient::create_coupon(self, currency, amount).await
    }

    async fn redeem_coupon(&self, coupon: &str) -> Result<ApiResponse<RedeemedCoupon>, YobitError> {
        YobitRestClient::redeem_coupon(self, coupon).await
    }
}
