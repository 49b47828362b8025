//! Stateless HTTP request builder and response parser for the bridge.
//!
//! # Design
//! `ApiBridge` holds only the validated configuration and carries no
//! mutable state between calls. `build_request` turns a descriptor into an
//! `HttpRequest`; `parse_response` turns the matching `HttpResponse` into a
//! `ResultDescriptor`. The caller executes the round-trip in between.

use serde_json::Value;
use url::Url;

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{RequestDescriptor, ResultDescriptor};

pub const USER_AGENT: &str = "OpenClaw-APIBridge/1.0";

#[derive(Debug, Clone)]
pub struct ApiBridge {
    config: BridgeConfig,
}

impl ApiBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn build_request(&self, descriptor: &RequestDescriptor) -> Result<HttpRequest, BridgeError> {
        let method = match descriptor.method.as_deref() {
            Some(m) => m.parse()?,
            None => HttpMethod::default(),
        };

        let endpoint = descriptor.endpoint.as_deref().unwrap_or("");
        let mut url = join_endpoint(&self.config.base_url, endpoint)?;
        append_query(&mut url, &descriptor.query_params)?;

        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];
        if let Some(key) = &self.config.api_key {
            headers.push(("Authorization".to_string(), format!("Bearer {key}")));
        }

        let body = match descriptor.body.as_ref().filter(|b| is_truthy(b)) {
            Some(b) => Some(
                serde_json::to_string(b).map_err(|e| BridgeError::Unclassified(e.to_string()))?,
            ),
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    pub fn parse_response(&self, request: &HttpRequest, response: HttpResponse) -> ResultDescriptor {
        let data = serde_json::from_str::<Value>(&response.body)
            .unwrap_or_else(|_| Value::String(response.body));

        ResultDescriptor {
            status_code: response.status,
            success: is_ok_status(response.status),
            url: request.url.clone(),
            method: request.method.to_string(),
            data,
        }
    }
}

/// Resolve `endpoint` relative to `base`. Leading slashes are stripped so
/// the endpoint never replaces the base path wholesale.
pub fn join_endpoint(base: &Url, endpoint: &str) -> Result<Url, BridgeError> {
    let relative = endpoint.trim_start_matches('/');
    base.join(relative)
        .map_err(|e| BridgeError::InvalidRequest(format!("cannot join endpoint {endpoint:?}: {e}")))
}

/// Append form-encoded pairs to `url`, keeping any query the endpoint
/// already carried. An empty map leaves the URL untouched.
///
/// Scalars are rendered the way Python's `str()` shows them to upstreams
/// built around `urlencode`: `True`, `False`, `None`.
pub fn append_query(url: &mut Url, params: &serde_json::Map<String, Value>) -> Result<(), BridgeError> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        let rendered = match value {
            Value::Null => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(BridgeError::InvalidRequest(format!(
                    "query parameter {key:?} must be a string, number or boolean"
                )))
            }
        };
        pairs.push((key, rendered));
    }
    if pairs.is_empty() {
        return Ok(());
    }
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(())
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` mean "send no body".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// 2xx and 3xx.
pub fn is_ok_status(status: u16) -> bool {
    (200..400).contains(&status)
}
