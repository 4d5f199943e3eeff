//! Forward-only cursor over a paginated tag listing

use crate::common::TagRegistry;
use crate::error::{PrunerError, Result};
use crate::registry::types::{PageCursor, Tag};
use futures::Stream;
use std::collections::VecDeque;

/// Yields the tags of a repository page by page, following `next` links.
///
/// A pager is single-pass: once it returns `None` or an error it stays
/// finished. Re-listing requires a new pager.
pub struct TagPager<'a, R: TagRegistry + ?Sized> {
    registry: &'a R,
    repository: &'a str,
    token: &'a str,
    cursor: Option<PageCursor>,
    buffer: VecDeque<Tag>,
    pages_fetched: usize,
}

impl<'a, R: TagRegistry + ?Sized> TagPager<'a, R> {
    pub fn new(registry: &'a R, repository: &'a str, token: &'a str) -> Self {
        Self {
            registry,
            repository,
            token,
            cursor: Some(PageCursor::First),
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Number of pages requested so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub async fn next(&mut self) -> Result<Option<Tag>> {
        loop {
            if let Some(tag) = self.buffer.pop_front() {
                return Ok(Some(tag));
            }

            // Taken before the request so a failed fetch leaves the pager finished.
            let Some(cursor) = self.cursor.take() else {
                return Ok(None);
            };

            let page = self
                .registry
                .fetch_tag_page(self.repository, self.token, &cursor)
                .await?;
            self.pages_fetched += 1;
            self.cursor = page.next.map(PageCursor::Next);
            self.buffer.extend(page.results);
        }
    }

    /// The same sequence as an async stream
    pub fn into_stream(self) -> impl Stream<Item = Result<Tag>> + 'a {
        futures::stream::try_unfold(self, |mut pager| async move {
            let tag = pager.next().await?;
            Ok::<_, PrunerError>(tag.map(|tag| (tag, pager)))
        })
    }
}
