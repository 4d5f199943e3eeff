//! Docker Hub Tag Pruner Library
//!
//! Logs into the Docker Hub web API, lists a repository's tags page by page,
//! selects the ones matching a name glob and last updated before a deadline,
//! and deletes them sequentially.

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod registry;

pub use common::TagRegistry;
pub use config::{AuthConfig, PruneConfig, RegistryConfig};
pub use error::{PrunerError, Result};
pub use logging::Logger;
pub use pipeline::{PruneReport, Pruner};
pub use registry::{RegistryClient, RegistryClientBuilder, Tag};
