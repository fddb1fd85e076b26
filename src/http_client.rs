//! HTTP client construction for the URL source and the registry listing.

use std::time::Duration;

/// Pool and timeout settings for the shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub pool_max_idle_per_host: usize,
    pub default_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 10,
            default_timeout: Duration::from_secs(30),
        }
    }
}

impl HttpConfig {
    /// Build a client with these settings. Response decompression and JSON
    /// decoding come from the client itself, so fetched bodies arrive already
    /// decoded.
    pub fn build_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .timeout(self.default_timeout)
            .build()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpConfig::default();
        assert_eq!(config.pool_max_idle_per_host, 10);
        assert_eq!(config.default_timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_build_client() {
        let client = HttpConfig::default().build_client();
        assert!(client.get("https://example.com").build().is_ok());
    }
}
