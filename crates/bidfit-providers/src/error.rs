//! Provider error type
//!
//! Shared by both capability seams. Steps translate these into their
//! own failure kinds, so this taxonomy only distinguishes what the
//! caller can act on: unreachable, rejected, undecodable, empty.

/// Errors from an external capability call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not be reached (connect failure, timeout)
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    /// The provider rejected the request
    #[error("provider returned status {status}: {body}")]
    Http { status: u16, body: String },

    /// The response could not be decoded into the expected shape
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// The provider answered with no usable content
    #[error("provider returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Unreachable(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}
