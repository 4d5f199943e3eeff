//! Command-line argument parsing

use crate::config::DEFAULT_REGISTRY;
use clap::Parser;

/// Environment variable holding the login password
pub const PASSWORD_ENV: &str = "DOCKER_PASSWORD";

#[derive(Parser, Debug, Clone)]
#[command(name = "prune-tags")]
#[command(about = "Delete Docker Hub tags that match a pattern and are older than a deadline")]
#[command(version)]
pub struct Args {
    /// Repository to prune, as org/name
    #[arg(value_name = "ORG/REPO")]
    pub repository: String,

    /// Shell glob matched against tag names
    #[arg(value_name = "TAG_PATTERN")]
    pub pattern: String,

    /// Cutoff such as "30 days ago", "yesterday" or "2024-01-31"
    #[arg(value_name = "DEADLINE")]
    pub deadline: String,

    /// Registry username
    #[arg(
        long = "username",
        env = "DOCKER_USERNAME",
        hide_env_values = true,
        help = "Username for registry login"
    )]
    pub username: Option<String>,

    /// Registry password; only ever read from `DOCKER_PASSWORD`
    #[arg(skip)]
    pub password: Option<String>,

    #[arg(
        long = "registry",
        default_value = DEFAULT_REGISTRY,
        help = "Base URL of the registry web API"
    )]
    pub registry: String,

    #[arg(
        long = "dry-run",
        short = 'n',
        help = "List the tags that would be deleted without deleting them"
    )]
    pub dry_run: bool,

    #[arg(long = "verbose", short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long = "quiet",
        short = 'q',
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    #[arg(long = "page-size", help = "Number of tags requested per listing page")]
    pub page_size: Option<u32>,

    #[arg(long = "skip-tls", help = "Skip TLS certificate verification")]
    pub skip_tls: bool,

    #[arg(
        long = "timeout",
        help = "Timeout for each request in seconds (default: wait indefinitely)"
    )]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse().password_from_env()
    }

    pub fn password_from_env(self) -> Self {
        let password = std::env::var(PASSWORD_ENV).ok();
        self.with_password(password)
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }
}
