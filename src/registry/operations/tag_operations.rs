//! Tag operations for registry client
//!
//! Implements the Docker Hub repository tag endpoints:
//! - Tag listing (GET /v2/repositories/{repo}/tags/), one page per call
//! - Tag deletion (DELETE /v2/repositories/{repo}/tags/{name}/)

use crate::error::handlers::{HttpErrorHandler, NetworkErrorHandler};
use crate::error::{PrunerError, Result};
use crate::logging::Logger;
use crate::registry::types::{PageCursor, Tag, TagPage};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;

#[derive(Debug, Clone)]
pub struct TagOperations {
    client: Client,
    address: String,
    output: Logger,
    page_size: Option<u32>,
}

impl TagOperations {
    pub fn new(client: Client, address: String, output: Logger) -> Self {
        Self {
            client,
            address,
            output,
            page_size: None,
        }
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    fn tags_url(&self, repository: &str) -> String {
        format!("{}/v2/repositories/{}/tags/", self.address, repository)
    }

    fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("JWT {}", token))
    }

    /// Resolve the URL of the page a cursor points at
    pub fn page_url(&self, repository: &str, cursor: &PageCursor) -> Result<Url> {
        match cursor {
            PageCursor::First => {
                let mut url = Url::parse(&self.tags_url(repository))?;
                if let Some(page_size) = self.page_size {
                    url.query_pairs_mut()
                        .append_pair("page_size", &page_size.to_string());
                }
                Ok(url)
            }
            PageCursor::Next(next) => Url::parse(next).map_err(|e| {
                PrunerError::Listing(format!("Invalid next page link {}: {}", next, e))
            }),
        }
    }

    /// Fetch one page of tags
    pub async fn fetch_page(
        &self,
        repository: &str,
        token: &str,
        cursor: &PageCursor,
    ) -> Result<TagPage> {
        let url = self.page_url(repository, cursor)?;
        self.output.detail(&format!("GET {}", url));

        let response = Self::authorized(self.client.get(url), token)
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "tag listing"))?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            self.output.detail(&format!(
                "Tag listing failed: HTTP {} - {}",
                status, error_text
            ));
            return Err(HttpErrorHandler::handle_listing_error(
                status,
                &error_text,
                repository,
            ));
        }

        let page: TagPage = response.json().await.map_err(|e| {
            PrunerError::Listing(format!("Failed to parse tags response: {}", e))
        })?;

        self.output.verbose(&format!(
            "Fetched {} tags from {}{}",
            page.results.len(),
            repository,
            if page.next.is_some() { " (more pages follow)" } else { "" }
        ));

        Ok(page)
    }

    /// Delete a single tag; anything but 204 No Content is a failure
    pub async fn delete_tag(&self, tag: &Tag, repository: &str, token: &str) -> Result<()> {
        let url = format!("{}{}/", self.tags_url(repository), tag.name);
        self.output.detail(&format!("DELETE {}", url));

        let response = Self::authorized(self.client.delete(&url), token)
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "tag deletion"))?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(HttpErrorHandler::handle_deletion_error(
                status,
                &error_text,
                repository,
                &tag.name,
            ));
        }

        Ok(())
    }
}
