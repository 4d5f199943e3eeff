//! Wire types for the Docker Hub repository API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag as returned by `GET /v2/repositories/{repo}/tags/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    pub name: String,
    /// RFC 3339 timestamp; null for tags that were never pushed
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub full_size: Option<u64>,
}

impl Tag {
    pub fn new(name: impl Into<String>, last_updated: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_updated: Some(last_updated.into()),
            full_size: None,
        }
    }

    /// Parsed `last_updated`, or `None` when it is absent or malformed
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_updated.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// One page of a tag listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagPage {
    #[serde(default)]
    pub count: Option<u64>,
    /// Absolute URL of the following page
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<Tag>,
}

/// Position of a tag listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    First,
    Next(String),
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: Option<String>,
}
