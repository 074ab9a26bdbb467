//! YoBit REST API client.
//!
//! Provides the public market-data API (`/api/3/...`) and the signed trade
//! API (`/tapi/`).
//!
//! # Trait-based API
//!
//! The [`YobitClient`] trait abstracts all REST API operations, enabling
//! mock implementations for testing and decorators around the real client.

mod client;
mod endpoints;
mod pairs;
pub mod private;
pub mod public;
mod traits;

pub use client::{KEY_HEADER, SIGN_HEADER, SignedRequest, YobitRestClient, YobitRestClientBuilder};
pub use endpoints::*;
pub use pairs::{PAIR_SEPARATOR, PairList, normalize_pair, normalize_pairs};
pub use traits::YobitClient;
