//! Error types for the MongoLab Partner client.
//!
//! Every failure is surfaced to the caller as a [`PartnerError`]; the
//! client never retries and never swallows a response.

use thiserror::Error;

/// Errors produced by [`crate::PartnerClient`]
#[derive(Error, Debug)]
pub enum PartnerError {
    /// The HTTP call could not complete (DNS, connection, TLS)
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The API answered with a status other than 200; carries the raw
    /// response body for diagnostics
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// A 200 response body that is neither valid JSON nor the literal `OK`
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Client construction or usage error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, PartnerError>;

impl PartnerError {
    /// Returns true if this is a "not found" error (404)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, PartnerError::Api { status: 404, .. })
    }

    /// Returns true if this is an authentication/authorization error (401/403)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PartnerError::Api { status: 401 | 403, .. })
    }

    /// Returns true if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, PartnerError::Api { status, .. } if *status >= 500)
    }

    /// The HTTP status code, for API errors
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            PartnerError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
