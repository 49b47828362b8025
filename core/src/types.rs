//! Input and output descriptors.
//!
//! # Design
//! The request descriptor is a struct of optional fields; serde fills the
//! defaults, so a missing key and an explicit `null` behave the same.
//! `Outcome` is what gets printed: either the result of a completed HTTP
//! exchange or the failure shape, never both.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BridgeError;

/// What the caller wants sent, as read from standard input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDescriptor {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub query_params: Map<String, Value>,
}

impl RequestDescriptor {
    /// Parse the raw standard-input text.
    pub fn from_json(input: &str) -> Result<Self, BridgeError> {
        // Parse to a Value first so that "not JSON at all" and "JSON of the
        // wrong shape" get different classifications.
        let value: Value = serde_json::from_str(input)?;
        if !value.is_object() {
            return Err(BridgeError::InvalidRequest(format!(
                "expected a JSON object, got {}",
                kind_of(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalized result of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDescriptor {
    pub status_code: u16,
    pub success: bool,
    pub url: String,
    pub method: String,
    pub data: Value,
}

/// Normalized failure. `success` is always `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
    pub error_type: String,
}

impl From<&BridgeError> for Failure {
    fn from(err: &BridgeError) -> Self {
        Failure {
            success: false,
            error: err.to_string(),
            error_type: err.error_type().to_string(),
        }
    }
}

/// The single JSON object printed per invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Success(ResultDescriptor),
    Failure(Failure),
}

impl Outcome {
    /// Process exit status for this outcome. An HTTP error status still
    /// counts as a completed exchange.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success(_) => 0,
            Outcome::Failure(_) => 1,
        }
    }

    /// Two-space indented JSON.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            // Only reachable if a map key fails to serialize, which `Value` cannot produce.
            format!(
                "{{\n  \"success\": false,\n  \"error\": {:?},\n  \"error_type\": \"UnclassifiedError\"\n}}",
                e.to_string()
            )
        })
    }
}

impl From<Result<ResultDescriptor, BridgeError>> for Outcome {
    fn from(result: Result<ResultDescriptor, BridgeError>) -> Self {
        match result {
            Ok(descriptor) => Outcome::Success(descriptor),
            Err(err) => Outcome::Failure(Failure::from(&err)),
        }
    }
}
