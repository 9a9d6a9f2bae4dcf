use anyhow::Result;
use clap::Parser;
use mongolab_partner::Config;
use tracing::{debug, error, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use error::CliError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    // Load configuration from specified path or default location
    let (config, config_path) = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        let config = Config::load_from_path(&path)?;
        (config, Some(path))
    } else {
        debug!("Loading config from default location");
        (Config::load()?, None)
    };
    let conn_mgr = ConnectionManager::with_config_path(config, config_path);

    // Execute command
    if let Err(e) = execute_command(&cli, &conn_mgr).await {
        eprintln!("{}", e.display_with_suggestions());
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "mongolabctl=warn,mongolab_partner=warn",
            1 => "mongolabctl=info,mongolab_partner=info",
            2 => "mongolabctl=debug,mongolab_partner=debug",
            _ => "mongolabctl=trace,mongolab_partner=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: &Cli, conn_mgr: &ConnectionManager) -> Result<(), CliError> {
    trace!("Executing command: {:?}", cli.command);
    info!("Command: {}", format_command(&cli.command));

    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::Version => {
            if cli.output.is_json() {
                let output_data = serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "name": env!("CARGO_PKG_NAME"),
                });
                output::print_output(output_data, cli.output).map_err(|e| {
                    CliError::OutputError {
                        message: e.to_string(),
                    }
                })?;
            } else {
                println!("mongolabctl {}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        }

        Commands::Profile(profile_cmd) => {
            debug!("Executing profile command");
            commands::profile::handle_profile_command(profile_cmd, conn_mgr, cli.output).await
        }

        Commands::Account(account_cmd) => {
            commands::account::handle_account_command(
                account_cmd,
                conn_mgr,
                cli.profile.as_deref(),
                cli.output,
            )
            .await
        }

        Commands::Database(database_cmd) => {
            commands::database::handle_database_command(
                database_cmd,
                conn_mgr,
                cli.profile.as_deref(),
                cli.output,
            )
            .await
        }

        Commands::Api { method, path, data } => {
            info!(
                "API call: {:?} {} {}",
                method,
                path,
                if data.is_some() {
                    "with data"
                } else {
                    "no data"
                },
            );
            commands::api::handle_api_command(
                conn_mgr,
                cli.profile.as_deref(),
                method,
                path,
                data.as_deref(),
                cli.output,
            )
            .await
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Format command for human-readable logging (without sensitive data)
fn format_command(command: &Commands) -> String {
    match command {
        Commands::Version => "version".to_string(),
        Commands::Account(cmd) => {
            use cli::AccountCommands::*;
            match cmd {
                List => "account list".to_string(),
                Get {
                    name,
                    with_databases,
                } => format!("account get {} (with_databases: {})", name, with_databases),
                Create { .. } => "account create".to_string(),
                Update { name, .. } => format!("account update {}", name),
                Delete { name } => format!("account delete {}", name),
            }
        }
        Commands::Database(cmd) => {
            use cli::DatabaseCommands::*;
            match cmd {
                List { account } => format!("database list {}", account),
                Add { account, .. } => format!("database add {}", account),
                Delete { account, db_name } => format!("database delete {} {}", account, db_name),
            }
        }
        Commands::Api { method, path, .. } => format!("api {:?} {}", method, path),
        Commands::Profile(cmd) => {
            use cli::ProfileCommands::*;
            match cmd {
                List => "profile list".to_string(),
                Path => "profile path".to_string(),
                Show { name } => format!("profile show {}", name),
                Set { name, .. } => format!("profile set {} [credentials redacted]", name),
                Remove { name } => format!("profile remove {}", name),
                Default { name } => format!("profile default {}", name),
            }
        }
    }
}
