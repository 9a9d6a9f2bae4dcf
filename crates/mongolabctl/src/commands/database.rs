//! Partner database commands

use crate::cli::DatabaseCommands;
use crate::connection::ConnectionManager;
use crate::error::{CliError, Result as CliResult};
use crate::output::{print_output, OutputFormat};
use tracing::debug;

pub async fn handle_database_command(
    cmd: &DatabaseCommands,
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    output: OutputFormat,
) -> CliResult<()> {
    let client = conn_mgr.create_client(profile_name)?;

    let response = match cmd {
        DatabaseCommands::List { account } => {
            debug!("Listing databases for {}", account);
            client.account_databases(account).await?
        }
        DatabaseCommands::Add { account, data } => {
            let payload = super::parse_data_payload(data)?;
            client.add_database(account, payload).await?
        }
        DatabaseCommands::Delete { account, db_name } => {
            debug!("Deleting database {} under {}", db_name, account);
            client.delete_database(account, db_name).await?
        }
    };

    print_output(response, output).map_err(|e| CliError::OutputError {
        message: e.to_string(),
    })
}
