use thiserror::Error;

/// Failure modes of a breed catalog load. Transport and decode failures are
/// both "the fetch failed"; `InvalidFormat` is the distinct case where the
/// request succeeded but the payload was not a JSON array.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("breed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response data format")]
    InvalidFormat,
    #[error("failed to decode breed payload: {0}")]
    Decode(#[from] serde_json::Error),
}
