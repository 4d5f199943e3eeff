//! Runner wiring parsed arguments into the prune pipeline

use crate::cli::args::Args;
use crate::config::{AuthConfig, PruneConfig, RegistryConfig};
use crate::error::Result;
use crate::logging::Logger;
use crate::pipeline::{PruneReport, Pruner};
use crate::registry::RegistryClientBuilder;
use chrono::Utc;
use std::time::Instant;

pub struct Runner {
    args: Args,
    output: Logger,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        let output = if args.quiet {
            Logger::new_quiet()
        } else {
            Logger::new(args.verbose)
        };

        Self { args, output }
    }

    pub fn output(&self) -> &Logger {
        &self.output
    }

    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig::new(self.args.registry.clone())
            .with_skip_tls(self.args.skip_tls)
            .with_timeout(self.args.timeout)
            .with_page_size(self.args.page_size)
    }

    pub fn prune_config(&self) -> PruneConfig {
        PruneConfig::new(
            self.args.repository.clone(),
            self.args.pattern.clone(),
            self.args.deadline.clone(),
        )
        .with_dry_run(self.args.dry_run)
    }

    /// Missing credentials are passed through empty and rejected by the login endpoint
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::new(
            self.args.username.clone().unwrap_or_default(),
            self.args.password.clone().unwrap_or_default(),
        )
    }

    pub async fn run(&self) -> Result<PruneReport> {
        let now = Utc::now();
        let start_time = Instant::now();

        self.output.section("Docker Hub Tag Pruner");

        let registry_config = self.registry_config();
        registry_config.validate()?;
        let prune_config = self.prune_config();
        let auth = self.auth_config();
        if auth.username.is_empty() {
            self.output
                .warning("No username given (DOCKER_USERNAME) - login will be attempted without one");
        }

        self.output.verbose(&format!("Registry: {}", registry_config.address));
        self.output.verbose(&format!("Repository: {}", prune_config.repository));

        let client = RegistryClientBuilder::from_config(&registry_config)
            .with_logger(self.output.clone())
            .build()?;

        let report = Pruner::new(&client, self.output.clone())
            .run(&prune_config, &auth, now)
            .await?;

        self.print_summary(&report, start_time);
        Ok(report)
    }

    fn print_summary(&self, report: &PruneReport, start_time: Instant) {
        let names: Vec<String> = report.matched.iter().map(|t| t.name.clone()).collect();
        self.output.list(
            if report.dry_run { "Tags that would be deleted" } else { "Deleted tags" },
            &names,
        );

        self.output.summary_kv(
            "Summary",
            &[
                ("Repository", self.args.repository.clone()),
                ("Deadline", report.deadline.to_rfc3339()),
                ("Tags scanned", report.scanned.to_string()),
                ("Tags matched", report.matched.len().to_string()),
                ("Tags deleted", report.deleted.len().to_string()),
            ],
        );

        self.output.success(&format!(
            "Operation completed in {}",
            self.output.format_duration(start_time.elapsed())
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["prune-tags"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["acme/widget", "nightly-*", "30 days ago"]);
        Args::try_parse_from(argv).unwrap()
    }

    fn runner(extra: &[&str]) -> Runner {
        Runner::new(args(extra))
    }

    #[test]
    fn test_configs_follow_arguments() {
        let runner = runner(&["--dry-run", "--timeout", "20", "--page-size", "25"]);

        let prune = runner.prune_config();
        assert_eq!(prune.repository, "acme/widget");
        assert!(prune.dry_run);

        let registry = runner.registry_config();
        assert_eq!(registry.timeout, Some(20));
        assert_eq!(registry.page_size, Some(25));
    }

    #[test]
    fn test_quiet_flag_selects_quiet_logger() {
        assert!(runner(&["--quiet"]).output().quiet);
        assert!(runner(&["--verbose"]).output().verbose);
    }

    #[test]
    fn test_credentials_combine_flag_and_environment_password() {
        let args = args(&["--username", "ci-bot"]).with_password(Some("pw".to_string()));
        let auth = Runner::new(args).auth_config();
        assert_eq!(auth.username, "ci-bot");
        assert_eq!(auth.password, "pw");
    }

    #[test]
    fn test_missing_credentials_become_empty() {
        let auth = runner(&[]).auth_config();
        assert_eq!(auth.password, "");
    }
}
