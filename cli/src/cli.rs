use api_bridge_core::config::{API_KEY_ENV, BASE_URL_ENV};
use api_bridge_core::RawConfig;
use clap::Parser;

/// Reads a JSON request descriptor on stdin, performs the HTTP call and
/// prints a JSON result on stdout.
#[derive(Debug, Parser)]
#[command(name = "api-bridge", version)]
pub struct Args {
    /// Base URL every endpoint is resolved against
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Bearer token sent in the Authorization header
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Args {
    pub fn into_raw_config(self) -> RawConfig {
        RawConfig {
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}
