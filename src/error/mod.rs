//! Error types for tag pruning operations

pub mod handlers;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrunerError>;

#[derive(Error, Debug)]
pub enum PrunerError {
    /// Login rejected or token missing from the login response
    #[error("Authentication error: {0}")]
    Authentication(String),
    /// A tag listing page could not be fetched
    #[error("Listing error: {0}")]
    Listing(String),
    /// A tag could not be deleted
    #[error("Deletion error: {0}")]
    Deletion(String),
    /// Deadline expression could not be resolved to an instant
    #[error("Deadline error: {0}")]
    Deadline(String),
    /// Tag name pattern is not a valid glob
    #[error("Pattern error: {0}")]
    Pattern(String),
    #[error("Configuration error: {0}")]
    Config(String),
    /// Transport level failures (connect, DNS, TLS)
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl PrunerError {
    /// Process exit code for this class of failure
    pub fn exit_code(&self) -> i32 {
        match self {
            PrunerError::Config(_) => 2,
            PrunerError::Deadline(_) | PrunerError::Pattern(_) => 3,
            PrunerError::Authentication(_) => 4,
            PrunerError::Listing(_) => 5,
            PrunerError::Deletion(_) => 6,
            PrunerError::Network(_) | PrunerError::Parse(_) => 1,
        }
    }
}

impl From<url::ParseError> for PrunerError {
    fn from(err: url::ParseError) -> Self {
        PrunerError::Config(format!("Invalid URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_failure_classes() {
        assert_eq!(PrunerError::Config("x".into()).exit_code(), 2);
        assert_eq!(PrunerError::Deadline("x".into()).exit_code(), 3);
        assert_eq!(PrunerError::Pattern("x".into()).exit_code(), 3);
        assert_eq!(PrunerError::Authentication("x".into()).exit_code(), 4);
        assert_eq!(PrunerError::Listing("x".into()).exit_code(), 5);
        assert_eq!(PrunerError::Deletion("x".into()).exit_code(), 6);
        assert_eq!(PrunerError::Network("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_display_includes_category() {
        let err = PrunerError::Deletion("tag nightly-1 (status 500)".into());
        assert_eq!(err.to_string(), "Deletion error: tag nightly-1 (status 500)");
    }
}
