//! Partner account commands

use crate::cli::AccountCommands;
use crate::connection::ConnectionManager;
use crate::error::{CliError, Result as CliResult};
use crate::output::{print_output, OutputFormat};
use tracing::debug;

pub async fn handle_account_command(
    cmd: &AccountCommands,
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    output: OutputFormat,
) -> CliResult<()> {
    let client = conn_mgr.create_client(profile_name)?;

    let response = match cmd {
        AccountCommands::List => {
            debug!("Listing partner accounts");
            client.list_accounts().await?
        }
        AccountCommands::Get {
            name,
            with_databases,
        } => {
            debug!("Fetching account {}", name);
            if *with_databases {
                client.get_account_with_databases(name).await?
            } else {
                client.get_account(name).await?
            }
        }
        AccountCommands::Create { data } => {
            let payload = super::parse_data_payload(data)?;
            client.create_account(payload).await?
        }
        AccountCommands::Update { name, data } => {
            let payload = super::parse_data_payload(data)?;
            client.update_account(name, payload).await?
        }
        AccountCommands::Delete { name } => client.delete_account(name).await?,
    };

    print_output(response, output).map_err(|e| CliError::OutputError {
        message: e.to_string(),
    })
}
