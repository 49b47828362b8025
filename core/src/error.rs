//! Error types for the request translator.
//!
//! # Design
//! Every failure in the pipeline is one `BridgeError`. The variants are
//! grouped by cause, and `error_type()` turns each into the coarse tag
//! printed in the failure output. `Timeout` has its own variant because
//! callers often want to tell a slow upstream apart from one they cannot
//! reach at all.

use thiserror::Error;

/// Errors raised while translating a request descriptor into an HTTP call.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Standard input was not syntactically valid JSON.
    #[error("invalid JSON input: {0}")]
    Parse(String),

    /// The input was valid JSON but could not be turned into a request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The base URL is missing or unusable, or the command line is malformed.
    #[error("{0}")]
    Config(String),

    /// The request did not complete within the configured deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// DNS, connect, or I/O failure while talking to the upstream.
    #[error("network error: {0}")]
    Network(String),

    /// Anything else.
    #[error("{0}")]
    Unclassified(String),
}

impl BridgeError {
    /// Classification tag written to the `error_type` field of a failure.
    pub fn error_type(&self) -> &'static str {
        match self {
            BridgeError::Parse(_) => "ParseError",
            BridgeError::InvalidRequest(_) => "InvalidRequestError",
            BridgeError::Config(_) => "ConfigError",
            BridgeError::Timeout(_) => "TimeoutError",
            BridgeError::Network(_) => "NetworkError",
            BridgeError::Unclassified(_) => "UnclassifiedError",
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    /// Syntax and truncation errors are parse failures; a well-formed
    /// document of the wrong shape is an invalid request.
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Syntax | Category::Eof => BridgeError::Parse(err.to_string()),
            Category::Data => BridgeError::InvalidRequest(err.to_string()),
            Category::Io => BridgeError::Unclassified(err.to_string()),
        }
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::Unclassified(err.to_string())
    }
}
