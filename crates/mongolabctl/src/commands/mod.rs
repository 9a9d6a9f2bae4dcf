//! Command handlers

pub mod account;
pub mod api;
pub mod database;
pub mod profile;

use crate::error::{CliError, Result as CliResult};
use serde_json::Value;

/// Parse a `--data` argument: inline JSON, or `@path` to read JSON from a file
pub fn parse_data_payload(data: &str) -> CliResult<Value> {
    if let Some(file_path) = data.strip_prefix('@') {
        let content = std::fs::read_to_string(file_path).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to read file '{}': {}", file_path, e),
        })?;
        serde_json::from_str(&content).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to parse JSON from file '{}': {}", file_path, e),
        })
    } else {
        serde_json::from_str(data).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to parse JSON from data parameter: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_inline_json() {
        let value = parse_data_payload(r#"{"name":"customer42"}"#).unwrap();
        assert_eq!(value, json!({"name": "customer42"}));
    }

    #[test]
    fn test_parse_invalid_json_is_invalid_input() {
        let err = parse_data_payload("{not json").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn test_parse_at_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, r#"{"plan":"free"}"#).unwrap();

        let value = parse_data_payload(&format!("@{}", path.display())).unwrap();
        assert_eq!(value, json!({"plan": "free"}));
    }

    #[test]
    fn test_parse_missing_file_is_invalid_input() {
        let err = parse_data_payload("@/nonexistent/payload.json").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }
}
