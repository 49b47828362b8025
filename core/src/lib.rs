//! Request translator for the API bridge.
//!
//! # Overview
//! Turns a JSON request descriptor into one outbound HTTP request against a
//! configured base URL, and the response into a normalized JSON result.
//! Network I/O is left to a `Transport` supplied by the host, so everything
//! here is deterministic and testable without sockets.
//!
//! # Design
//! - `ApiBridge` is stateless; it holds only the validated `BridgeConfig`.
//! - `build_request` / `parse_response` bracket the I/O boundary.
//! - `translate` chains the steps; `Outcome::from` is the one place an
//!   error becomes the printed failure shape.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod types;

pub use client::ApiBridge;
pub use config::{BridgeConfig, RawConfig};
pub use error::BridgeError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use pipeline::translate;
pub use types::{Failure, Outcome, RequestDescriptor, ResultDescriptor};
