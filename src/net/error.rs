//! Failure classification for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors surfaced by [`crate::net::api`] calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Browser-only call made outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The non-blank message the server attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
