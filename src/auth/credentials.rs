//! Credential management for YoBit trade API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::YobitError;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "YOBIT_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "YOBIT_API_SECRET";

/// API credentials containing the key and secret.
///
/// Sent as the `key` header and used to sign the body for every trade API call.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Read credentials from `YOBIT_API_KEY` and `YOBIT_API_SECRET`.
    pub fn from_env() -> Result<Self, YobitError> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Read credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, YobitError> {
        let read = |name: &str| {
            std::env::var(name)
                .map_err(|_| YobitError::Auth(format!("Environment variable {name} not set")))
        };
        Ok(Self::new(read(key_var)?, read(secret_var)?))
    }

    /// Like [`Credentials::from_env`], but returns `None` when a variable is missing.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
