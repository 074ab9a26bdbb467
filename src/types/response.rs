//! Response envelopes shared by the public and trade APIs.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

use crate::error::{ApiError, YobitError};

/// The trade API envelope: `{"success": 1, "return": {...}}` or
/// `{"success": 0, "error": "..."}`.
///
/// The client returns this as parsed, without looking at `success`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// `1` on success, `0` on failure.
    #[serde(default)]
    pub success: i64,
    /// The payload, present on success.
    #[serde(rename = "return")]
    pub result: Option<T>,
    /// The failure message, present when `success` is `0`.
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Whether YoBit reported success.
    pub fn is_success(&self) -> bool {
        self.success != 0
    }

    /// Convert a failure into [`YobitError::Api`] and unwrap the payload.
    ///
    /// A successful response without a `return` field is reported as
    /// [`YobitError::InvalidResponse`]. YoBit answers `ActiveOrders` with a
    /// bare `{"success":1}` when nothing is open; use
    /// [`ApiResponse::into_result_or_default`] for such map payloads.
    pub fn into_result(self) -> Result<T, YobitError> {
        if !self.is_success() {
            return Err(self.into_api_error());
        }
        self.result
            .ok_or_else(|| YobitError::InvalidResponse("Response missing 'return' field".to_string()))
    }

    /// Like [`ApiResponse::into_result`], but a successful response without
    /// a `return` field yields `T::default()`.
    pub fn into_result_or_default(self) -> Result<T, YobitError>
    where
        T: Default,
    {
        if !self.is_success() {
            return Err(self.into_api_error());
        }
        Ok(self.result.unwrap_or_default())
    }

    fn into_api_error(self) -> YobitError {
        let message = self.error.unwrap_or_else(|| "unknown error".to_string());
        YobitError::Api(ApiError::new(message))
    }
}

/// Failure object returned by the public API, e.g. for an unknown pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicFailure {
    /// Always `0`.
    pub success: i64,
    /// The failure message.
    pub error: String,
}

/// A public API response: either the payload or YoBit's failure object.
///
/// A top-level object carrying a `success` or `error` key is the failure
/// object; anything else is the payload.
#[derive(Debug, Clone)]
pub enum PublicResponse<T> {
    /// YoBit answered with `{"success": 0, "error": "..."}`.
    Failure(PublicFailure),
    /// The endpoint payload.
    Data(T),
}

impl<'de, T> Deserialize<'de> for PublicResponse<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_failure = value
            .as_object()
            .is_some_and(|object| object.contains_key("success") || object.contains_key("error"));

        if is_failure {
            PublicFailure::deserialize(value)
                .map(PublicResponse::Failure)
                .map_err(de::Error::custom)
        } else {
            T::deserialize(value)
                .map(PublicResponse::Data)
                .map_err(de::Error::custom)
        }
    }
}

impl<T> PublicResponse<T> {
    /// Convert a failure into [`YobitError::Api`] and unwrap the payload.
    pub fn into_result(self) -> Result<T, YobitError> {
        match self {
            PublicResponse::Data(data) => Ok(data),
            PublicResponse::Failure(failure) => Err(YobitError::Api(ApiError::new(failure.error))),
        }
    }

    /// Borrow the payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            PublicResponse::Data(data) => Some(data),
            PublicResponse::Failure(_) => None,
        }
    }
}
