//! Configuration for the bridge.
//!
//! - `MIDDLEWARE_URL`: base URL every endpoint is resolved against (required).
//! - `API_KEY`: optional bearer token sent as `Authorization: Bearer <key>`.

use url::Url;

use crate::error::BridgeError;

pub const BASE_URL_ENV: &str = "MIDDLEWARE_URL";
pub const API_KEY_ENV: &str = "API_KEY";

/// Unvalidated configuration values, as found in the environment or on the
/// command line.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl RawConfig {
    /// Validate into a `BridgeConfig`. Empty values count as unset.
    pub fn resolve(&self) -> Result<BridgeConfig, BridgeError> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                BridgeError::Config(format!("{BASE_URL_ENV} environment variable is not set"))
            })?;

        let base_url = Url::parse(raw)
            .map_err(|e| BridgeError::Config(format!("{BASE_URL_ENV} is not a valid URL: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(BridgeError::Config(format!(
                "{BASE_URL_ENV} must be an http or https URL, got {raw:?}"
            )));
        }

        let api_key = self.api_key.clone().filter(|k| !k.is_empty());

        Ok(BridgeConfig { base_url, api_key })
    }
}

/// Validated, immutable configuration for one invocation.
#[derive(Clone)]
pub struct BridgeConfig {
    pub base_url: Url,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
