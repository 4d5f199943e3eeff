//! Login against the Docker Hub web API

use crate::config::AuthConfig;
use crate::error::handlers::{HttpErrorHandler, NetworkErrorHandler};
use crate::error::{PrunerError, Result};
use crate::logging::Logger;
use crate::registry::types::{LoginRequest, LoginResponse};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

#[derive(Debug, Clone)]
pub struct Auth {
    client: Client,
    address: String,
    output: Logger,
}

impl Auth {
    pub fn new(client: Client, address: String, output: Logger) -> Self {
        Self {
            client,
            address,
            output,
        }
    }

    /// Exchange username and password for a JWT session token
    pub async fn login(&self, auth: &AuthConfig) -> Result<String> {
        self.output
            .verbose(&format!("Attempting authentication for user: {}", auth.username));

        let url = format!("{}/v2/users/login/", self.address);
        let body = LoginRequest {
            username: &auth.username,
            password: &auth.password,
        };

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "login"))?;

        let status = response.status();
        self.output
            .detail(&format!("Login response status: {}", status));

        if status != StatusCode::OK {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(HttpErrorHandler::handle_auth_error(status, &error_text));
        }

        let login: LoginResponse = response.json().await.map_err(|e| {
            PrunerError::Authentication(format!("Failed to parse login response: {}", e))
        })?;

        let token = login
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                PrunerError::Authentication("Login response did not contain a token".to_string())
            })?;

        self.output
            .detail(&format!("Token obtained (length: {} chars)", token.len()));
        Ok(token)
    }
}
