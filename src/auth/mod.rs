//! Authentication module for the YoBit trade API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Pluggable nonce updates for replay attack prevention
//! - HMAC-SHA512 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{API_KEY_VAR, API_SECRET_VAR, Credentials};
pub use nonce::{FnNonceUpdate, IncrementNonce, NonceCounter, NonceUpdatePolicy, unix_time_secs};
pub use signature::{sign_body, sign_request};
