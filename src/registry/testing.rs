//! In-memory registry used by unit tests

use crate::common::TagRegistry;
use crate::config::AuthConfig;
use crate::error::{PrunerError, Result};
use crate::registry::types::{PageCursor, Tag, TagPage};
use async_trait::async_trait;
use std::sync::Mutex;

const PAGE_PREFIX: &str = "memory://tags/page/";

/// Serves fixed pages and records every call made against it
#[derive(Default)]
pub struct InMemoryRegistry {
    pages: Vec<Vec<Tag>>,
    reject_login: bool,
    failing_page: Option<usize>,
    failing_delete: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryRegistry {
    pub fn with_pages(pages: Vec<Vec<Tag>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn rejecting_login(mut self) -> Self {
        self.reject_login = true;
        self
    }

    pub fn failing_page(mut self, index: usize) -> Self {
        self.failing_page = Some(index);
        self
    }

    pub fn failing_delete(mut self, name: &str) -> Self {
        self.failing_delete = Some(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn page_requests(&self) -> usize {
        self.calls().iter().filter(|c| c.starts_with("page ")).count()
    }

    /// Names passed to `delete_tag`, including a failed attempt
    pub fn delete_requests(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix("delete ").map(str::to_string))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TagRegistry for InMemoryRegistry {
    async fn authenticate(&self, auth: &AuthConfig) -> Result<String> {
        self.record(format!("login {}", auth.username));
        if self.reject_login {
            return Err(PrunerError::Authentication("Invalid credentials provided".into()));
        }
        Ok(format!("token-for-{}", auth.username))
    }

    async fn fetch_tag_page(
        &self,
        repository: &str,
        _token: &str,
        cursor: &PageCursor,
    ) -> Result<TagPage> {
        let index = match cursor {
            PageCursor::First => 0,
            PageCursor::Next(url) => url
                .strip_prefix(PAGE_PREFIX)
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| PrunerError::Listing(format!("unknown page link {}", url)))?,
        };
        self.record(format!("page {}", index));

        if self.failing_page == Some(index) {
            return Err(PrunerError::Listing(format!("page {} of {} unavailable", index, repository)));
        }

        let results = self.pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.pages.len()).then(|| format!("{}{}", PAGE_PREFIX, index + 1));
        Ok(TagPage {
            count: None,
            next,
            results,
        })
    }

    async fn delete_tag(&self, tag: &Tag, repository: &str, _token: &str) -> Result<()> {
        self.record(format!("delete {}", tag.name));
        if self.failing_delete.as_deref() == Some(tag.name.as_str()) {
            return Err(PrunerError::Deletion(format!(
                "Deleting {}:{} failed (status 500)",
                repository, tag.name
            )));
        }
        Ok(())
    }
}
