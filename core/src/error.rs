//! Error types for the real-estate API client.
//!
//! # Design
//! Three terminal failure classes, one per stage of a fetch: the transport
//! failed to complete the round-trip, the server answered with a non-success
//! status, or the body would not decode into the expected shape. None are
//! retried here; the shared transport stays reusable after any of them.

use std::fmt;

/// Errors returned by the listings client.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round-trip itself failed (connection refused, DNS, timeout).
    Transport(reqwest::Error),

    /// The server returned a non-2xx status; carries the raw body.
    HttpStatus { status: u16, body: String },

    /// The response body could not be decoded as a listing array; carries
    /// the offending payload.
    Decode { message: String, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport failure: {e}"),
            ApiError::HttpStatus { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Decode { message, body } => {
                write!(f, "decode failed: {message} (body: {body})")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}
