//! Trading pair normalization.
//!
//! YoBit expects pair names in lower case, and public endpoints accept
//! several pairs joined with `-` in the URL path.

/// Separator between pairs in public endpoint paths.
pub const PAIR_SEPARATOR: &str = "-";

/// Anything that can be rendered as YoBit's pair path segment.
///
/// A single pair is lower-cased as is; a list is lower-cased and joined with
/// [`PAIR_SEPARATOR`].
pub trait PairList {
    /// Render the normalized pair string.
    fn to_pair_string(&self) -> String;
}

impl PairList for str {
    fn to_pair_string(&self) -> String {
        self.to_lowercase()
    }
}

impl PairList for String {
    fn to_pair_string(&self) -> String {
        self.as_str().to_pair_string()
    }
}

impl<S: AsRef<str>> PairList for [S] {
    fn to_pair_string(&self) -> String {
        self.iter()
            .map(|pair| pair.as_ref().to_lowercase())
            .collect::<Vec<_>>()
            .join(PAIR_SEPARATOR)
    }
}

impl<S: AsRef<str>, const N: usize> PairList for [S; N] {
    fn to_pair_string(&self) -> String {
        self.as_slice().to_pair_string()
    }
}

impl<S: AsRef<str>> PairList for Vec<S> {
    fn to_pair_string(&self) -> String {
        self.as_slice().to_pair_string()
    }
}

/// Normalize one pair or a list of pairs.
///
/// ```rust
/// use yobit_api_client::rest::normalize_pairs;
///
/// assert_eq!(normalize_pairs(&["BTC_USD", "LTC_BTC"]), "btc_usd-ltc_btc");
/// assert_eq!(normalize_pairs("ETH_BTC"), "eth_btc");
/// ```
pub fn normalize_pairs<P: PairList + ?Sized>(pairs: &P) -> String {
    pairs.to_pair_string()
}

/// Normalize the single pair taken by trade API parameters.
///
/// The trade API accepts exactly one pair, so lists are not accepted here.
///
/// ```rust
/// use yobit_api_client::rest::normalize_pair;
///
/// assert_eq!(normalize_pair(" LTC_BTC"), "ltc_btc");
/// ```
pub fn normalize_pair(pair: &str) -> String {
    pair.trim().to_lowercase()
}
