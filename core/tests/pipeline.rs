//! `translate` end to end with in-memory transports.
//!
//! A recording transport stands in for the network so each test can assert
//! both the printed outcome and whether a request was issued at all.

use std::cell::RefCell;

use api_bridge_core::{
    translate, BridgeError, HttpRequest, HttpResponse, Outcome, RawConfig, Transport,
};
use serde_json::{json, Value};

/// Answers every request with a canned response and remembers what it saw.
struct Recording {
    status: u16,
    body: String,
    seen: RefCell<Vec<HttpRequest>>,
}

impl Recording {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Transport for Recording {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BridgeError> {
        self.seen.borrow_mut().push(request.clone());
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Echoes the request body back, like a JSON echo endpoint.
struct Echo;

impl Transport for Echo {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BridgeError> {
        Ok(HttpResponse {
            status: 200,
            body: request.body.clone().unwrap_or_default(),
        })
    }
}

struct Failing(fn() -> BridgeError);

impl Transport for Failing {
    fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, BridgeError> {
        Err((self.0)())
    }
}

fn config(base_url: &str) -> RawConfig {
    RawConfig {
        base_url: Some(base_url.to_string()),
        api_key: None,
    }
}

fn printed(outcome: &Outcome) -> Value {
    serde_json::from_str(&outcome.to_pretty_json()).unwrap()
}

#[test]
fn documented_example_post_users() {
    let transport = Recording::new(201, r#"{"id":7}"#);
    let input = r#"{"method":"post","endpoint":"/users","body":{"name":"a"}}"#;

    let outcome = Outcome::from(translate(input, &config("http://api.test/"), &transport));

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(
        printed(&outcome),
        json!({
            "status_code": 201,
            "success": true,
            "url": "http://api.test/users",
            "method": "POST",
            "data": {"id": 7}
        })
    );

    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url, "http://api.test/users");
    let sent: Value = serde_json::from_str(seen[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({"name": "a"}));
}

#[test]
fn echo_round_trip() {
    let input = r#"{"method":"POST","endpoint":"echo","body":{"x":1}}"#;
    let result = translate(input, &config("http://api.test/"), &Echo).unwrap();
    assert!(result.success);
    assert_eq!(result.data, json!({"x": 1}));
}

#[test]
fn big_integers_are_sent_and_returned_exactly() {
    let transport = Recording::new(200, r#"{"total":98765432109876543210987654321}"#);
    let input = r#"{"method":"POST","body":{"id":123456789012345678901234567890}}"#;

    let result = translate(input, &config("http://api.test/"), &transport).unwrap();

    let seen = transport.seen.borrow();
    assert_eq!(seen[0].body.as_deref(), Some(r#"{"id":123456789012345678901234567890}"#));
    assert_eq!(result.data.to_string(), r#"{"total":98765432109876543210987654321}"#);
}

#[test]
fn omitted_method_is_get_in_request_and_output() {
    let transport = Recording::new(200, "[]");
    let result = translate(r#"{"endpoint":"items"}"#, &config("http://api.test/"), &transport).unwrap();
    assert_eq!(result.method, "GET");
    assert_eq!(transport.seen.borrow()[0].method.as_str(), "GET");
}

#[test]
fn non_json_response_is_returned_as_text() {
    let transport = Recording::new(200, "plain old text");
    let result = translate("{}", &config("http://api.test/"), &transport).unwrap();
    assert_eq!(result.data, json!("plain old text"));
}

#[test]
fn error_status_is_still_a_completed_exchange() {
    let transport = Recording::new(404, r#"{"detail":"missing"}"#);
    let outcome = Outcome::from(translate("{}", &config("http://api.test/"), &transport));
    assert_eq!(outcome.exit_code(), 0);
    let value = printed(&outcome);
    assert_eq!(value["success"], false);
    assert_eq!(value["status_code"], 404);
    assert_eq!(value["data"]["detail"], "missing");
}

#[test]
fn missing_base_url_never_reaches_transport() {
    let transport = Recording::new(200, "{}");
    let outcome = Outcome::from(translate("{}", &RawConfig::default(), &transport));

    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(printed(&outcome)["error_type"], "ConfigError");
    assert_eq!(printed(&outcome)["success"], false);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn malformed_input_never_reaches_transport() {
    for input in ["not json", r#"{"method": "GET""#, ""] {
        let transport = Recording::new(200, "{}");
        let outcome = Outcome::from(translate(input, &config("http://api.test/"), &transport));
        assert_eq!(outcome.exit_code(), 1, "input {input:?}");
        assert_eq!(printed(&outcome)["error_type"], "ParseError", "input {input:?}");
        assert_eq!(transport.calls(), 0);
    }
}

#[test]
fn parse_error_wins_over_missing_config() {
    let transport = Recording::new(200, "{}");
    let outcome = Outcome::from(translate("{", &RawConfig::default(), &transport));
    assert_eq!(printed(&outcome)["error_type"], "ParseError");
}

#[test]
fn timeout_becomes_failure_shape() {
    let transport = Failing(|| BridgeError::Timeout("no response within 30s".into()));
    let outcome = Outcome::from(translate("{}", &config("http://api.test/"), &transport));

    assert_eq!(outcome.exit_code(), 1);
    let value = printed(&outcome);
    assert_eq!(value["success"], false);
    assert_eq!(value["error_type"], "TimeoutError");
    assert_eq!(value["error"], "request timed out: no response within 30s");
}

#[test]
fn connection_failure_becomes_failure_shape() {
    let transport = Failing(|| BridgeError::Network("connection refused".into()));
    let outcome = Outcome::from(translate("{}", &config("http://api.test/"), &transport));
    assert_eq!(printed(&outcome)["error_type"], "NetworkError");
}

#[test]
fn works_through_trait_object() {
    let transport: Box<dyn Transport> = Box::new(Echo);
    let result = translate(
        r#"{"method":"PUT","body":[1,2]}"#,
        &config("http://api.test/"),
        transport.as_ref(),
    )
    .unwrap();
    assert_eq!(result.data, json!([1, 2]));
}
