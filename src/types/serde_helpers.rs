//! Custom serde helpers for YoBit's loosely typed JSON.
//!
//! YoBit is inconsistent about quoting: ids and timestamps arrive as JSON
//! numbers on some endpoints and as strings on others.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

/// Deserialize a value that YoBit may send either as a number or a string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use yobit_api_client::types::serde_helpers::number_or_string;
///
/// #[derive(Deserialize)]
/// struct Order {
///     #[serde(deserialize_with = "number_or_string::deserialize")]
///     timestamp_created: i64,
/// }
///
/// let a: Order = serde_json::from_str(r#"{"timestamp_created":1418654530}"#).unwrap();
/// let b: Order = serde_json::from_str(r#"{"timestamp_created":"1418654530"}"#).unwrap();
/// assert_eq!(a.timestamp_created, b.timestamp_created);
/// ```
pub mod number_or_string {
    use super::*;

    /// Deserialize from a JSON number or string using `FromStr`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => s.parse().map_err(de::Error::custom),
            serde_json::Value::Number(n) => n.to_string().parse().map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected number or string, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "number_or_string::deserialize")]
        value: u64,
    }

    #[test]
    fn test_number_or_string() {
        let a: Probe = serde_json::from_str(r#"{"value":100025362}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"value":"100025362"}"#).unwrap();
        assert_eq!(a.value, 100025362);
        assert_eq!(b.value, 100025362);
        assert!(serde_json::from_str::<Probe>(r#"{"value":true}"#).is_err());
    }
}
