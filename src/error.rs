//! Error types for the YoBit client library.

use thiserror::Error;

/// The main error type for all YoBit client operations.
#[derive(Error, Debug)]
pub enum YobitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Form body could not be encoded
    #[error("Form encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// YoBit reported a failure in the response payload.
    ///
    /// Only produced by the opt-in `into_result` helpers; the client itself
    /// passes the payload through untouched.
    #[error("YoBit API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body as received
        body: String,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The nonce update policy did not move the nonce forward
    #[error("Nonce must strictly increase: current {current}, policy returned {next}")]
    InvalidNonce {
        /// Nonce stored before the update
        current: u64,
        /// Value returned by the update policy
        next: u64,
    },

    /// An external nonce store failed
    #[error("Nonce store error: {0}")]
    NonceStore(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for trade endpoints")]
    MissingCredentials,
}

/// A failure reported by YoBit inside a response body.
///
/// YoBit answers with HTTP 200 and `{"success": 0, "error": "..."}` for
/// business-level failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The raw error message from YoBit
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ApiError {
    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.message.to_ascii_lowercase().contains(needle)
    }

    /// Check if the nonce was rejected (reused or too small).
    pub fn is_invalid_nonce(&self) -> bool {
        self.contains("invalid nonce")
    }

    /// Check if the API key was rejected.
    pub fn is_invalid_key(&self) -> bool {
        self.contains("invalid key") || self.contains("api key")
    }

    /// Check if the account lacks funds for the operation.
    pub fn is_insufficient_funds(&self) -> bool {
        self.contains("insufficient funds")
    }

    /// Check if the pair name was not recognized.
    pub fn is_invalid_pair(&self) -> bool {
        self.contains("invalid pair")
    }
}
