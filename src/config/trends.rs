//! Trend scraper configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Trend scraper configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsConfig {
    /// Page holding the benchmark table
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl TrendsConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate trend scraper configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("http") {
            return Err(ValidationError::InvalidUrl("trends.url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    "https://databox.com/ppc-industry-benchmarks".to_string()
}

fn default_timeout() -> u64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_benchmarks_page() {
        let config = TrendsConfig::default();
        assert_eq!(config.url, "https://databox.com/ppc-industry-benchmarks");
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_http_url_fails() {
        let config = TrendsConfig {
            url: "file:///tmp/page.html".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
