//! Trade API endpoints (authentication required).
//!
//! Every wrapper builds its parameters for one remote method and delegates
//! to [`YobitRestClient::private_request`]. Responses come back as
//! [`ApiResponse`] without their `success` flag being inspected.

mod types;

pub use types::*;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::YobitError;
use crate::rest::YobitRestClient;
use crate::rest::endpoints::methods;
use crate::rest::pairs::normalize_pair;
use crate::types::ApiResponse;

impl YobitRestClient {
    /// Get balances, key rights and open order count.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use yobit_api_client::auth::Credentials;
    /// use yobit_api_client::rest::YobitRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = YobitRestClient::builder()
    ///         .credentials(Credentials::from_env()?)
    ///         .build()?;
    ///
    ///     let info = client.get_account_info().await?.into_result()?;
    ///     for (coin, balance) in info.funds {
    ///         println!("{}: {}", coin, balance);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_info(&self) -> Result<ApiResponse<AccountInfo>, YobitError> {
        #[derive(Serialize)]
        struct Empty {}
        self.private_request(methods::GET_INFO, &Empty {}).await
    }

    /// Place a limit order.
    pub async fn trade(
        &self,
        request: &TradeRequest,
    ) -> Result<ApiResponse<TradeResult>, YobitError> {
        self.private_request(methods::TRADE, request).await
    }

    /// List active orders for one pair.
    ///
    /// YoBit omits `return` when no order is open; use
    /// [`ApiResponse::into_result_or_default`] to get an empty map then.
    pub async fn get_active_orders(&self, pair: &str) -> Result<ApiResponse<Orders>, YobitError> {
        #[derive(Serialize)]
        struct Params {
            pair: String,
        }
        let params = Params {
            pair: normalize_pair(pair),
        };
        self.private_request(methods::ACTIVE_ORDERS, &params).await
    }

    /// Get one order by id.
    pub async fn get_order_info(&self, order_id: u64) -> Result<ApiResponse<Orders>, YobitError> {
        self.private_request(methods::ORDER_INFO, &OrderIdParams { order_id })
            .await
    }

    /// Cancel an order by id.
    pub async fn cancel_order(
        &self,
        order_id: u64,
    ) -> Result<ApiResponse<CancelOrderResult>, YobitError> {
        self.private_request(methods::CANCEL_ORDER, &OrderIdParams { order_id })
            .await
    }

    /// Get own trade history.
    pub async fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<ApiResponse<TradeHistory>, YobitError> {
        self.private_request(methods::TRADE_HISTORY, request).await
    }

    /// Get the deposit address for a coin.
    ///
    /// # Arguments
    ///
    /// * `coin_name` - Coin code, e.g. `BTC`.
    /// * `need_new` - Request a fresh address; sent as `0` when `None`.
    pub async fn get_deposit_address(
        &self,
        coin_name: &str,
        need_new: Option<bool>,
    ) -> Result<ApiResponse<DepositAddress>, YobitError> {
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(rename = "coinName")]
            coin_name: &'a str,
            need_new: u8,
        }
        let params = Params {
            coin_name,
            need_new: u8::from(need_new.unwrap_or(false)),
        };
        self.private_request(methods::GET_DEPOSIT_ADDRESS, &params)
            .await
    }

    /// Withdraw coins to an external address.
    pub async fn withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> Result<ApiResponse<WithdrawResult>, YobitError> {
        self.private_request(methods::WITHDRAW_COINS_TO_ADDRESS, request)
            .await
    }

    /// Create a YoBit code (coupon) holding `amount` of `currency`.
    pub async fn create_coupon(
        &self,
        currency: &str,
        amount: Decimal,
    ) -> Result<ApiResponse<CreatedCoupon>, YobitError> {
        #[derive(Serialize)]
        struct Params<'a> {
            currency: &'a str,
            amount: Decimal,
        }
        self.private_request(methods::CREATE_YOBICODE, &Params { currency, amount })
            .await
    }

    /// Redeem a YoBit code (coupon).
    pub async fn redeem_coupon(
        &self,
        coupon: &str,
    ) -> Result<ApiResponse<RedeemedCoupon>, YobitError> {
        #[derive(Serialize)]
        struct Params<'a> {
            coupon: &'a str,
        }
        self.private_request(methods::REDEEM_YOBICODE, &Params { coupon })
            .await
    }
}

#[derive(Serialize)]
struct OrderIdParams {
    order_id: u64,
}
