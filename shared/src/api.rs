//! API error taxonomy and client configuration
//!
//! Shared between the gateway (reqwest) and the frontend (gloo-net)
//! so both sides classify failures the same way.

use serde::{Deserialize, Serialize};

/// API error types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Authentication required or failed
    Auth(String),
    /// Resource not found
    NotFound(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Auth error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// The text a form or modal should show for this failure.
    ///
    /// Server errors surface the backend-provided message verbatim;
    /// the other variants keep the `Display` prefix.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Build the user-facing message for a non-2xx response: the backend's
/// `error` field when it sent one, otherwise the templated fallback.
pub fn server_error_message(status: u16, error_field: Option<&str>) -> String {
    match error_field {
        Some(error) if !error.is_empty() => error.to_string(),
        _ => format!("There was a server error: {}", status),
    }
}

/// Configuration for issuing API calls against one base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Optional bearer token for authenticated requests
    pub auth_token: Option<String>,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
