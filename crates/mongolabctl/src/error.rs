//! Error types for mongolabctl
//!
//! Structured error types using thiserror so failures carry enough
//! context for actionable suggestions.

use mongolab_partner::{ConfigError, PartnerError};
use thiserror::Error;

/// Main error type for the mongolabctl application
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("No profile configured. Use 'mongolabctl profile set' to configure a profile.")]
    NoProfileConfigured,

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for mongolabctl operations
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            CliError::ProfileNotFound { name } => vec![
                "List available profiles: mongolabctl profile list".to_string(),
                format!("Create profile '{}': mongolabctl profile set {} --account <account> --username <user>", name, name),
            ],
            CliError::NoProfileConfigured => vec![
                "Create a profile: mongolabctl profile set <name> --account <account> --username <user>".to_string(),
                "Or set MONGOLAB_ACCOUNT, MONGOLAB_USERNAME, and MONGOLAB_PASSWORD".to_string(),
            ],
            CliError::AuthenticationFailed { .. } => vec![
                "Check your credentials: mongolabctl profile show <profile>".to_string(),
                "Verify the username and password are correct".to_string(),
            ],
            CliError::ApiError { message } if message.contains("404") => vec![
                "Verify the account or database name is correct".to_string(),
                "List accounts to find the correct name: mongolabctl account list".to_string(),
            ],
            CliError::InvalidInput { .. } => vec![
                "Check the command syntax: mongolabctl <command> --help".to_string(),
                "Verify the --data payload is valid JSON (or @file points at one)".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Error message plus suggestions, formatted for stderr
    pub fn display_with_suggestions(&self) -> String {
        let mut out = format!("Error: {}", self);
        for suggestion in self.suggestions() {
            out.push_str("\n  tip: ");
            out.push_str(&suggestion);
        }
        out
    }
}

impl From<PartnerError> for CliError {
    fn from(err: PartnerError) -> Self {
        if err.is_unauthorized() {
            CliError::AuthenticationFailed {
                message: err.to_string(),
            }
        } else {
            match err {
                PartnerError::Config(msg) => CliError::Configuration(msg),
                other => CliError::ApiError {
                    message: other.to_string(),
                },
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name } => CliError::ProfileNotFound { name },
            ConfigError::NoProfiles { .. } => CliError::NoProfileConfigured,
            other => CliError::Configuration(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::InvalidInput {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::OutputError {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_partner_error_maps_to_authentication_failed() {
        let err = PartnerError::Api {
            status: 401,
            body: "denied".to_string(),
        };
        assert!(matches!(
            CliError::from(err),
            CliError::AuthenticationFailed { .. }
        ));
    }

    #[test]
    fn test_not_found_suggestions_mention_account_list() {
        let err = CliError::ApiError {
            message: "API error (HTTP 404): gone".to_string(),
        };
        let rendered = err.display_with_suggestions();
        assert!(rendered.contains("account list"));
    }

    #[test]
    fn test_config_profile_not_found_maps_through() {
        let err = ConfigError::ProfileNotFound {
            name: "acme".to_string(),
        };
        assert!(matches!(
            CliError::from(err),
            CliError::ProfileNotFound { .. }
        ));
    }
}
