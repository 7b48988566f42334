//! Fetch Errors
//!
//! Every variant is handled the same way: logged to the console, never shown,
//! never retried automatically.

use std::fmt;

/// Failure of a single page load
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or was rejected by the browser
    Network(String),

    /// The server answered with a non-2xx status
    Status(u16),

    /// The response body was not a list of posts
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status(status) => write!(f, "unexpected HTTP status {status}"),
            FetchError::Decode(msg) => write!(f, "could not decode posts: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
