//! Registry client for the Docker Hub web API
//!
//! [`RegistryClient`] bundles login and tag operations behind the
//! [`TagRegistry`] trait. Every request is awaited before the next is sent.

use crate::common::TagRegistry;
use crate::config::{AuthConfig, DEFAULT_REGISTRY, RegistryConfig};
use crate::error::{PrunerError, Result};
use crate::logging::Logger;
use crate::registry::auth::Auth;
use crate::registry::operations::TagOperations;
use crate::registry::types::{PageCursor, Tag, TagPage};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct RegistryClientBuilder {
    address: String,
    skip_tls: bool,
    timeout: Option<u64>,
    page_size: Option<u32>,
    output: Logger,
}

impl Default for RegistryClientBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY.to_string())
    }
}

impl RegistryClientBuilder {
    pub fn new(address: String) -> Self {
        Self {
            address,
            skip_tls: false,
            timeout: None,
            page_size: None,
            output: Logger::default(),
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.address.clone())
            .with_skip_tls(config.skip_tls)
            .with_timeout(config.timeout)
            .with_page_size(config.page_size)
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

    pub fn with_logger(mut self, output: Logger) -> Self {
        self.output = output;
        self
    }

    pub fn build(self) -> Result<RegistryClient> {
        let mut builder = Client::builder();
        if self.skip_tls {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| PrunerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let address = self.address.trim_end_matches('/').to_string();

        Ok(RegistryClient {
            auth: Auth::new(client.clone(), address.clone(), self.output.clone()),
            tags: TagOperations::new(client, address.clone(), self.output.clone())
                .with_page_size(self.page_size),
            address,
            output: self.output,
        })
    }
}

pub struct RegistryClient {
    address: String,
    auth: Auth,
    tags: TagOperations,
    output: Logger,
}

impl RegistryClient {
    pub fn builder(address: String) -> RegistryClientBuilder {
        RegistryClientBuilder::new(address)
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl TagRegistry for RegistryClient {
    async fn authenticate(&self, auth: &AuthConfig) -> Result<String> {
        let token = self.auth.login(auth).await?;
        self.output.success("Authentication successful");
        Ok(token)
    }

    async fn fetch_tag_page(
        &self,
        repository: &str,
        token: &str,
        cursor: &PageCursor,
    ) -> Result<TagPage> {
        self.tags.fetch_page(repository, token, cursor).await
    }

    async fn delete_tag(&self, tag: &Tag, repository: &str, token: &str) -> Result<()> {
        self.tags.delete_tag(tag, repository, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = RegistryClient::builder("http://localhost:5000/".to_string())
            .with_logger(Logger::new_quiet())
            .build()
            .unwrap();
        assert_eq!(client.address(), "http://localhost:5000");
    }

    #[test]
    fn test_builder_from_config() {
        let config = RegistryConfig::default()
            .with_timeout(Some(30))
            .with_page_size(Some(50));
        let client = RegistryClientBuilder::from_config(&config).build().unwrap();
        assert_eq!(client.address(), DEFAULT_REGISTRY);
    }
}
