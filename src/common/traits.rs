//! Common traits shared by the registry client and the pruning pipeline

use crate::config::AuthConfig;
use crate::error::Result;
use crate::registry::pager::TagPager;
use crate::registry::types::{PageCursor, Tag, TagPage};
use async_trait::async_trait;

/// Registry operations the pruning pipeline depends on
#[async_trait]
pub trait TagRegistry: Send + Sync {
    /// Exchange credentials for a session token
    async fn authenticate(&self, auth: &AuthConfig) -> Result<String>;

    /// Fetch a single page of the tag listing
    async fn fetch_tag_page(
        &self,
        repository: &str,
        token: &str,
        cursor: &PageCursor,
    ) -> Result<TagPage>;

    /// Delete exactly one tag
    async fn delete_tag(&self, tag: &Tag, repository: &str, token: &str) -> Result<()>;

    /// Lazy, forward-only listing of every tag in `repository`
    fn list_tags<'a>(&'a self, repository: &'a str, token: &'a str) -> TagPager<'a, Self>
    where
        Self: Sized,
    {
        TagPager::new(self, repository, token)
    }
}
