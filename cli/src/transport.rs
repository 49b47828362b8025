//! Blocking HTTP transport built on `ureq`.
//!
//! Every HTTP status comes back as data (`http_status_as_error(false)`);
//! only failures to complete the exchange become errors. Extension methods
//! (`PROPFIND`, `PURGE`, ...) are sent as given. One global
//! deadline covers DNS, connect, sending and reading the body.

use std::io;
use std::time::Duration;

use api_bridge_core::{BridgeError, HttpRequest, HttpResponse, Transport};
use ureq::http;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .allow_non_standard_methods(true)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    fn classify(&self, err: ureq::Error) -> BridgeError {
        match err {
            ureq::Error::Timeout(_) => self.timed_out(),
            ureq::Error::Io(e) if e.kind() == io::ErrorKind::TimedOut => self.timed_out(),
            ureq::Error::Io(e) => BridgeError::Network(e.to_string()),
            ureq::Error::HostNotFound => BridgeError::Network("host not found".to_string()),
            ureq::Error::ConnectionFailed => BridgeError::Network("connection failed".to_string()),
            ureq::Error::BadUri(msg) => BridgeError::InvalidRequest(format!("bad URI: {msg}")),
            ureq::Error::Http(e) => BridgeError::InvalidRequest(e.to_string()),
            other => BridgeError::Unclassified(other.to_string()),
        }
    }

    fn timed_out(&self) -> BridgeError {
        BridgeError::Timeout(format!("no response within {:?}", self.timeout))
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BridgeError> {
        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let invalid = |e: http::Error| BridgeError::InvalidRequest(e.to_string());
        let sent = match request.body.clone() {
            Some(body) => self.agent.run(builder.body(body).map_err(invalid)?),
            None => self.agent.run(builder.body(()).map_err(invalid)?),
        };
        let mut response = sent.map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        // No size cap: the whole body is handed back however large it is.
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| self.classify(e))?;

        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
