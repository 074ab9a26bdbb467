//! Common types used across the YoBit client library.

pub mod common;
pub mod response;
pub mod serde_helpers;

pub use common::*;
pub use response::{ApiResponse, PublicFailure, PublicResponse};
