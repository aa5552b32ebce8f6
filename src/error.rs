//! Error types for failed version lookups

use thiserror::Error;

/// Failure of a single lookup round trip.
///
/// An empty result set is not an error; it surfaces as `Ok(None)` from
/// [`HangarClient::try_find_latest_version`](crate::HangarClient::try_find_latest_version).
#[derive(Debug, Error)]
pub enum HangarError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
