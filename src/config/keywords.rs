//! Keyword dataset configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Keyword dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordsConfig {
    /// Path to the CSV dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

impl KeywordsConfig {
    /// Validate keyword dataset configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dataset_path.trim().is_empty() {
            return Err(ValidationError::EmptyDatasetPath);
        }
        Ok(())
    }
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> String {
    "data/keywords.csv".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_valid() {
        let config = KeywordsConfig::default();
        assert_eq!(config.dataset_path, "data/keywords.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_path_fails() {
        let config = KeywordsConfig {
            dataset_path: "   ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
