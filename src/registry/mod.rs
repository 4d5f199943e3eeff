//! Registry module for Docker Hub interactions
//!
//! This module provides login, paginated tag listing and tag deletion
//! against the Docker Hub web API (`/v2/users/login/`,
//! `/v2/repositories/{repo}/tags/`).

pub mod auth;
pub mod client;
pub mod operations;
pub mod pager;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::Auth;
pub use client::{RegistryClient, RegistryClientBuilder};
pub use pager::TagPager;
pub use types::{PageCursor, Tag, TagPage};
