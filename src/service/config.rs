use std::{fmt, time::Duration};

pub const DEFAULT_MAX_MATCHES: usize = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the retrieval flows. Constructed explicitly and passed
/// in at call time; nothing here is global.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_key: String,
    pub max_matches: usize,
    pub timeout: Duration,
    /// Opt-in thread-per-id match fetching. Sequential when off.
    pub parallel_match_fetch: bool,
}

impl ApiConfig {
    pub fn new(api_key: &str) -> Result<Self, ConfigError> {
        let mut config = ApiConfig::default();
        config.set_api_key(api_key)?;
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replaces the key. A blank key is rejected and the prior key retained.
    pub fn set_api_key(&mut self, key: &str) -> Result<(), ConfigError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::BlankApiKey);
        }
        self.api_key = key.to_string();
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Development keys are handed out with this shape. Informational only,
    /// never enforced on set.
    pub fn api_key_looks_valid(&self) -> bool {
        self.api_key.starts_with("RGAPI-") && self.api_key.len() > 20
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            max_matches: DEFAULT_MAX_MATCHES,
            timeout: DEFAULT_TIMEOUT,
            parallel_match_fetch: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    BlankApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::BlankApiKey => write!(f, "API key must not be empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_rejected_and_prior_key_retained() {
        let mut config = ApiConfig::new("RGAPI-12345678-abcd-efgh").unwrap();
        assert!(config.set_api_key("   ").is_err());
        assert!(config.set_api_key("").is_err());
        assert_eq!(config.api_key(), "RGAPI-12345678-abcd-efgh");
    }

    #[test]
    fn set_trims_surrounding_whitespace() {
        let mut config = ApiConfig::default();
        config.set_api_key("  RGAPI-key  ").unwrap();
        assert_eq!(config.api_key(), "RGAPI-key");
    }

    #[test]
    fn format_check_is_informational() {
        let mut config = ApiConfig::default();
        config.set_api_key("not-a-riot-key").unwrap();
        assert!(config.has_api_key());
        assert!(!config.api_key_looks_valid());

        config.set_api_key("RGAPI-14040adb-7749-4591-9fe2").unwrap();
        assert!(config.api_key_looks_valid());
    }
}
