//! Tag pruning pipeline
//!
//! Resolves the deadline, builds both predicates, logs in, streams the
//! repository's tags through the deadline and name filters, and deletes the
//! survivors one at a time in listing order. The first failure ends the run.

use crate::common::TagRegistry;
use crate::config::{AuthConfig, PruneConfig};
use crate::error::Result;
use crate::filter::{TagPredicate, by_deadline, by_name_pattern, parse_deadline};
use crate::logging::Logger;
use crate::registry::types::Tag;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use futures::future::ready;

/// Outcome of a prune run
#[derive(Debug, Clone)]
pub struct PruneReport {
    /// Resolved cutoff; tags updated at or after it are kept
    pub deadline: DateTime<Utc>,
    /// Tags listed from the registry
    pub scanned: usize,
    /// Tags selected by both predicates, in listing order
    pub matched: Vec<Tag>,
    /// Tags actually deleted; empty in dry-run mode
    pub deleted: Vec<Tag>,
    pub dry_run: bool,
}

pub struct Pruner<'a, R: TagRegistry> {
    registry: &'a R,
    output: Logger,
}

impl<'a, R: TagRegistry> Pruner<'a, R> {
    pub fn new(registry: &'a R, output: Logger) -> Self {
        Self { registry, output }
    }

    /// Run the pipeline. `now` anchors relative deadline expressions.
    pub async fn run(
        &self,
        config: &PruneConfig,
        auth: &AuthConfig,
        now: DateTime<Utc>,
    ) -> Result<PruneReport> {
        let deadline = parse_deadline(&config.deadline, now)?;
        let date_predicate = by_deadline(deadline);
        let name_predicate = by_name_pattern(&config.pattern)?;

        self.output.info(&format!(
            "Pruning {} tags matching {:?} last updated before {}",
            config.repository,
            name_predicate.as_str(),
            deadline.to_rfc3339()
        ));

        let token = self.registry.authenticate(auth).await?;

        let mut scanned = 0usize;
        let matched: Vec<Tag> = self
            .registry
            .list_tags(&config.repository, &token)
            .into_stream()
            .inspect_ok(|_| scanned += 1)
            .try_filter(|tag| ready(date_predicate.matches(tag)))
            .try_filter(|tag| ready(name_predicate.matches(tag)))
            .try_collect()
            .await?;

        self.output.info(&format!(
            "{} of {} tags selected for deletion",
            matched.len(),
            scanned
        ));

        let mut report = PruneReport {
            deadline,
            scanned,
            matched,
            deleted: Vec::new(),
            dry_run: config.dry_run,
        };

        if config.dry_run {
            for tag in &report.matched {
                self.output.step(&format!("Would delete {}:{}", config.repository, tag.name));
            }
            self.output.info("Dry run mode - no tags deleted");
            return Ok(report);
        }

        for tag in &report.matched {
            self.output.step(&format!("Deleting {}:{}", config.repository, tag.name));
            self.registry
                .delete_tag(tag, &config.repository, &token)
                .await?;
            report.deleted.push(tag.clone());
        }

        Ok(report)
    }
}
