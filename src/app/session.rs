/**
 * Session Client Module
 *
 * HTTP client functions for the login and sign-up endpoints. Each call is a
 * single POST with a JSON body, no retries, no timeout.
 */

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::app::types::{LoginRequest, SessionResult, SignupRequest};

/// Errors from a login or sign-up call.
///
/// A response that decodes with `success: false` is not an error; it is a
/// valid `SessionResult` and is surfaced as-is.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Connection or send failure
    #[error("network error: {0}")]
    Transport(String),
    /// Response body did not decode as a session result
    #[error("malformed server response: {0}")]
    InvalidResponse(String),
    /// Worker runtime could not be constructed
    #[error("failed to start worker runtime: {0}")]
    Runtime(String),
}

/// Login user with username and password
pub fn login(
    config: &Config,
    username: String,
    password: String,
) -> Result<SessionResult, SessionError> {
    let request = LoginRequest { username, password };
    post_credentials(config.api_url("/api/login"), &request)
}

/// Sign up new user with username, email, and password
pub fn signup(
    config: &Config,
    username: String,
    email: String,
    password: String,
) -> Result<SessionResult, SessionError> {
    let request = SignupRequest {
        username,
        email,
        password,
    };
    post_credentials(config.api_url("/api/signup"), &request)
}

/// Single attempt, blocking the calling thread. The body is decoded without
/// consulting the HTTP status line, so a structured failure in the body is
/// surfaced instead of a bare status code.
fn post_credentials<T: Serialize>(
    url: String,
    request: &T,
) -> Result<SessionResult, SessionError> {
    let client = Client::new();

    let rt = Runtime::new().map_err(|e| SessionError::Runtime(e.to_string()))?;

    rt.block_on(async {
        tracing::debug!(%url, "posting credentials");

        let response = client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        serde_json::from_slice::<SessionResult>(&body)
            .map_err(|e| SessionError::InvalidResponse(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let error = SessionError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "network error: connection refused");
    }

    #[test]
    fn test_invalid_response_display() {
        let error = SessionError::InvalidResponse("expected value".to_string());
        assert!(error.to_string().contains("malformed server response"));
    }
}
