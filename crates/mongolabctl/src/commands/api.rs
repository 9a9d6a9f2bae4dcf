//! Raw API access commands for direct REST endpoint calls

use crate::cli::HttpMethod;
use crate::connection::ConnectionManager;
use crate::error::{CliError, Result as CliResult};
use crate::output::{print_output, OutputFormat};
use serde_json::Value;

pub async fn handle_api_command(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    method: &HttpMethod,
    path: &str,
    data: Option<&str>,
    output: OutputFormat,
) -> CliResult<()> {
    let client = conn_mgr.create_client(profile_name)?;

    // Ensure path starts with /
    let normalized_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    let body: Option<Value> = match data {
        Some(data_str) => Some(super::parse_data_payload(data_str)?),
        None => None,
    };

    let response = match method {
        HttpMethod::Get => client.get_raw(&normalized_path).await?,
        HttpMethod::Post => {
            let body = body.unwrap_or(serde_json::json!({}));
            client.post_raw(&normalized_path, body).await?
        }
        HttpMethod::Put => {
            let body = body.unwrap_or(serde_json::json!({}));
            client.put_raw(&normalized_path, body).await?
        }
        HttpMethod::Delete => client.delete_raw(&normalized_path).await?,
    };

    print_output(response, output).map_err(|e| CliError::OutputError {
        message: e.to_string(),
    })
}
