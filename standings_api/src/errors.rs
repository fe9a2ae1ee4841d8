//! Error types for the API client.

/// Classified failure of a single standings request.
///
/// Every variant is terminal for the call that produced it; the client never
/// retries internally.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status. `body` is a truncated snippet.
    #[error("Request failed with status {status}")]
    Http { status: u16, body: String },
    /// The request did not complete within the client timeout.
    #[error("Request timed out")]
    Timeout,
    /// Any other transport failure (DNS, connection reset, TLS, body read).
    #[error("Network error: {0}")]
    Network(String),
    /// Everything else, including malformed JSON and a missing `response` field.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Short lowercase label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Timeout => "timeout",
            Self::Network(_) => "network",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Unexpected(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
