//! Standardized error construction for registry HTTP failures

use crate::error::PrunerError;
use reqwest::StatusCode;

/// Standard error handler for HTTP responses
pub struct HttpErrorHandler;

impl HttpErrorHandler {
    /// Handle login failures
    pub fn handle_auth_error(status: StatusCode, error_text: &str) -> PrunerError {
        let error_msg = match status.as_u16() {
            400 => format!("Malformed login request: {}", error_text),
            401 => "Invalid credentials provided".to_string(),
            403 => "Access denied - account may be locked or require 2FA".to_string(),
            404 => "Login endpoint not found".to_string(),
            429 => "Rate limited during login".to_string(),
            _ => format!("Login failed (status {}): {}", status, error_text),
        };

        PrunerError::Authentication(error_msg)
    }

    /// Handle tag listing failures
    pub fn handle_listing_error(
        status: StatusCode,
        error_text: &str,
        repository: &str,
    ) -> PrunerError {
        let error_msg = match status.as_u16() {
            401 => format!("Unauthorized to list tags of {}: {}", repository, error_text),
            403 => format!("Forbidden to list tags of {}: {}", repository, error_text),
            404 => format!("Repository {} not found: {}", repository, error_text),
            429 => format!("Rate limited while listing {}: {}", repository, error_text),
            500..=599 => format!(
                "Registry server error while listing {} (status {}): {}",
                repository, status, error_text
            ),
            _ => format!(
                "Listing tags of {} failed (status {}): {}",
                repository, status, error_text
            ),
        };

        PrunerError::Listing(error_msg)
    }

    /// Handle tag deletion failures
    pub fn handle_deletion_error(
        status: StatusCode,
        error_text: &str,
        repository: &str,
        tag: &str,
    ) -> PrunerError {
        let error_msg = match status.as_u16() {
            401 => format!("Unauthorized to delete {}:{}: {}", repository, tag, error_text),
            403 => format!(
                "Forbidden: insufficient permissions to delete {}:{}: {}",
                repository, tag, error_text
            ),
            404 => format!("Tag {}:{} not found: {}", repository, tag, error_text),
            429 => format!("Rate limited while deleting {}:{}", repository, tag),
            _ => format!(
                "Deleting {}:{} failed (status {}): {}",
                repository, tag, status, error_text
            ),
        };

        PrunerError::Deletion(error_msg)
    }
}

/// Network error categorization and handling
pub struct NetworkErrorHandler;

impl NetworkErrorHandler {
    /// Categorize and format transport errors with helpful context
    pub fn handle_network_error(error: &reqwest::Error, context: &str) -> PrunerError {
        if error.is_timeout() {
            PrunerError::Network(format!("{} timed out: {}", context, error))
        } else if error.is_connect() {
            PrunerError::Network(format!("Connection error during {}: {}", context, error))
        } else if error.is_decode() {
            PrunerError::Parse(format!("Invalid response during {}: {}", context, error))
        } else {
            PrunerError::Network(format!("{} network error: {}", context, error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_is_authentication_variant() {
        let err = HttpErrorHandler::handle_auth_error(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, PrunerError::Authentication(ref m) if m.contains("Invalid credentials")));
    }

    #[test]
    fn test_listing_error_mentions_repository() {
        let err = HttpErrorHandler::handle_listing_error(StatusCode::NOT_FOUND, "", "acme/widget");
        match err {
            PrunerError::Listing(msg) => assert!(msg.contains("acme/widget")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_deletion_error_mentions_tag_and_status() {
        let err = HttpErrorHandler::handle_deletion_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
            "acme/widget",
            "nightly-1",
        );
        match err {
            PrunerError::Deletion(msg) => {
                assert!(msg.contains("acme/widget:nightly-1"));
                assert!(msg.contains("500"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
