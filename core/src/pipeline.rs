//! The whole request translation in one pass.
//!
//! Parse input, resolve configuration, build the request, execute it, parse
//! the response. The first error ends the pass; the transport is only
//! called once everything before it has succeeded.

use tracing::{debug, info};

use crate::client::ApiBridge;
use crate::config::RawConfig;
use crate::error::BridgeError;
use crate::http::Transport;
use crate::types::{RequestDescriptor, ResultDescriptor};

pub fn translate<T>(input: &str, config: &RawConfig, transport: &T) -> Result<ResultDescriptor, BridgeError>
where
    T: Transport + ?Sized,
{
    let descriptor = RequestDescriptor::from_json(input)?;
    let bridge = ApiBridge::new(config.resolve()?);
    let request = bridge.build_request(&descriptor)?;

    debug!(
        method = %request.method,
        url = %request.url,
        has_body = request.body.is_some(),
        authorized = bridge.config().api_key.is_some(),
        "sending request"
    );
    let response = transport.execute(&request)?;
    info!(status = response.status, url = %request.url, "received response");

    Ok(bridge.parse_response(&request, response))
}
