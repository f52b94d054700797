//! Client Configuration
//!
//! Where the API lives. The base URL defaults to `/api/v1` and can be
//! overridden with `FITTRACK_API_URL`, either at build time (the browser has no
//! process environment) or at run time on native targets.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "/api/v1";
pub const BASE_URL_ENV: &str = "FITTRACK_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Runtime variable first, then the value baked in at build time.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .or_else(|| option_env!("FITTRACK_API_URL").map(str::to_string))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_base_url);
        tracing::debug!(%base_url, "client config resolved");
        Self { base_url }
    }

    /// Anchor a path-only base URL (`/api/v1`) to an origin such as
    /// `http://localhost:5173`. Absolute base URLs are left alone.
    pub fn with_origin(mut self, origin: &str) -> Self {
        if self.base_url.starts_with('/') {
            self.base_url = format!("{}{}", origin.trim_end_matches('/'), self.base_url);
        }
        self
    }

    /// Full URL for an API path such as `goals` or `goals/3`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = ClientConfig::new("http://api.test/api/v1/");
        assert_eq!(config.endpoint("/goals"), "http://api.test/api/v1/goals");
        assert_eq!(config.endpoint("goals/3"), "http://api.test/api/v1/goals/3");
    }

    #[test]
    fn test_with_origin() {
        let config = ClientConfig::new("/api/v1").with_origin("http://localhost:5173/");
        assert_eq!(config.base_url, "http://localhost:5173/api/v1");

        let absolute = ClientConfig::new("https://fit.example/api").with_origin("http://localhost");
        assert_eq!(absolute.base_url, "https://fit.example/api");
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
