//! Configuration for registry access and prune runs

use crate::error::{PrunerError, Result};

/// Docker Hub web API host
pub const DEFAULT_REGISTRY: &str = "https://hub.docker.com";

/// Login credentials
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

/// Registry connection settings
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub address: String,
    pub skip_tls: bool,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout: Option<u64>,
    pub page_size: Option<u32>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY.to_string())
    }
}

impl RegistryConfig {
    pub fn new(address: String) -> Self {
        Self {
            address,
            skip_tls: false,
            timeout: None,
            page_size: None,
        }
    }

    pub fn with_skip_tls(mut self, skip_tls: bool) -> Self {
        self.skip_tls = skip_tls;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.address.is_empty() {
            return Err(PrunerError::Config(
                "Registry address cannot be empty".to_string(),
            ));
        }

        if !self.address.starts_with("http://") && !self.address.starts_with("https://") {
            return Err(PrunerError::Config(format!(
                "Invalid registry address: {}. Must start with http:// or https://",
                self.address
            )));
        }

        if self.timeout == Some(0) {
            return Err(PrunerError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if self.page_size == Some(0) {
            return Err(PrunerError::Config(
                "Page size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// What to prune
#[derive(Debug, Clone)]
pub struct PruneConfig {
    /// `org/name`
    pub repository: String,
    /// Shell glob matched against tag names
    pub pattern: String,
    /// Deadline expression, resolved at the start of the run
    pub deadline: String,
    pub dry_run: bool,
}

impl PruneConfig {
    pub fn new(repository: String, pattern: String, deadline: String) -> Self {
        Self {
            repository,
            pattern,
            deadline,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_is_valid() {
        let config = RegistryConfig::default();
        assert_eq!(config.address, DEFAULT_REGISTRY);
        assert!(config.timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_address_without_scheme() {
        let config = RegistryConfig::new("hub.docker.com".to_string());
        assert!(matches!(config.validate(), Err(PrunerError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_timeout_and_page_size() {
        let config = RegistryConfig::default().with_timeout(Some(0));
        assert!(config.validate().is_err());

        let config = RegistryConfig::default().with_page_size(Some(0));
        assert!(config.validate().is_err());
    }
}
