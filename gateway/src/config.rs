//! Gateway configuration from environment variables.

use anyhow::Context;
use std::env;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the the-404 backend API, as reachable from the
    /// gateway process (not necessarily the browser-facing URL).
    pub internal_api_base_url: String,
    /// Dev mode relaxes the `Secure` cookie attribute for plain-HTTP
    /// local setups.
    pub dev_mode: bool,
}

impl GatewayConfig {
    pub fn from_env(dev_mode: bool) -> anyhow::Result<Self> {
        let internal_api_base_url = env::var("INTERNAL_API_BASE_URL")
            .or_else(|_| env::var("API_BASE_URL"))
            .context("INTERNAL_API_BASE_URL (or API_BASE_URL) must be set")?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            internal_api_base_url,
            dev_mode,
        })
    }

    pub fn backend_url(&self, path: &str) -> String {
        format!("{}{}", self.internal_api_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_joins_paths() {
        let config = GatewayConfig {
            internal_api_base_url: "http://localhost:8000".into(),
            dev_mode: true,
        };
        assert_eq!(
            config.backend_url("/users/login"),
            "http://localhost:8000/users/login"
        );
    }
}
