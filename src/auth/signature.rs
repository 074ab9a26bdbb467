//! HMAC-SHA512 signature generation for YoBit trade API authentication.
//!
//! YoBit signs the exact URL-encoded POST body:
//! ```text
//! Sign = hex(HMAC-SHA512(POST_body, api_secret))
//! ```
//!
//! The secret is used as raw bytes, and the digest is sent lower-case hex
//! encoded in the `sign` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::YobitError;

type HmacSha512 = Hmac<Sha512>;

/// Sign a URL-encoded body with a raw secret.
///
/// # Example
///
/// ```rust
/// use yobit_api_client::auth::sign_body;
///
/// let signature = sign_body("s", "method=getInfo&nonce=1").unwrap();
/// assert_eq!(signature.len(), 128);
/// ```
pub fn sign_body(secret: &str, body: &str) -> Result<String, YobitError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| YobitError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign a URL-encoded body with the secret from `credentials`.
pub fn sign_request(credentials: &Credentials, body: &str) -> Result<String, YobitError> {
    sign_body(credentials.expose_secret(), body)
}
