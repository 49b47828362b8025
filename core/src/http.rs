//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `ApiBridge` builds an
//! `HttpRequest` and parses an `HttpResponse` without touching the network;
//! whoever implements `Transport` performs the actual round-trip. Keeping
//! the I/O behind one trait lets the pipeline run against a fake transport
//! in tests.

use std::fmt;
use std::str::FromStr;

use http::Method;

use crate::error::BridgeError;

/// HTTP method for a request.
///
/// Any syntactically valid token is accepted, so extension methods such as
/// `PROPFIND` or `PURGE` pass through unchanged. Always upper-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMethod(Method);

impl HttpMethod {
    pub const GET: HttpMethod = HttpMethod(Method::GET);
    pub const POST: HttpMethod = HttpMethod(Method::POST);
    pub const PUT: HttpMethod = HttpMethod(Method::PUT);
    pub const PATCH: HttpMethod = HttpMethod(Method::PATCH);
    pub const DELETE: HttpMethod = HttpMethod(Method::DELETE);

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for HttpMethod {
    fn default() -> Self {
        HttpMethod::GET
    }
}

impl FromStr for HttpMethod {
    type Err = BridgeError;

    /// Case-insensitive; the stored method is upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::from_bytes(s.to_uppercase().as_bytes())
            .map(HttpMethod)
            .map_err(|_| BridgeError::InvalidRequest(format!("invalid HTTP method: {s:?}")))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is fully resolved, query string included. `body` is already
/// serialized JSON, or `None` when nothing should be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes an `HttpRequest` and hands back the response.
///
/// Implementations must return every HTTP status as an `HttpResponse`;
/// only failures to complete the exchange are errors.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BridgeError>;
}
