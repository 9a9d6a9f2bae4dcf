//! Profile management commands

use anyhow::Context;
use serde_json::json;

use crate::cli::ProfileCommands;
use crate::connection::ConnectionManager;
use crate::error::{CliError, Result as CliResult};
use crate::output::{print_output, OutputFormat};
use mongolab_partner::{Config, Profile};

pub async fn handle_profile_command(
    cmd: &ProfileCommands,
    conn_mgr: &ConnectionManager,
    output: OutputFormat,
) -> CliResult<()> {
    match cmd {
        ProfileCommands::List => {
            let profiles: Vec<_> = conn_mgr
                .config
                .list_profiles()
                .into_iter()
                .map(|(name, profile)| {
                    json!({
                        "name": name,
                        "account": profile.account,
                        "username": profile.username,
                        "api_url": profile.api_url,
                        "default": conn_mgr.config.default_profile.as_deref() == Some(name.as_str()),
                    })
                })
                .collect();
            print_result(json!(profiles), output)
        }

        ProfileCommands::Show { name } => {
            let profile = conn_mgr.config.profile(name)?;
            // Passwords never leave the config file
            print_result(
                json!({
                    "name": name,
                    "account": profile.account,
                    "username": profile.username,
                    "password": profile.password.as_ref().map(|_| "<configured>"),
                    "api_url": profile.api_url,
                }),
                output,
            )
        }

        ProfileCommands::Set {
            name,
            account,
            username,
            password,
            api_url,
        } => {
            // Prompt for password if not provided
            let password = match password {
                Some(p) => p.clone(),
                None => rpassword::prompt_password("Enter password: ")
                    .context("Failed to read password")?,
            };

            let profile = Profile {
                account: account.clone(),
                username: username.clone(),
                password: Some(password),
                api_url: api_url
                    .clone()
                    .unwrap_or_else(|| mongolab_partner::DEFAULT_API_URL.to_string()),
            };

            let mut updated = conn_mgr.clone();
            updated.config.set_profile(name.clone(), profile);
            updated.save_config()?;

            println!("Profile '{}' saved", name);
            Ok(())
        }

        ProfileCommands::Remove { name } => {
            let mut updated = conn_mgr.clone();
            if updated.config.remove_profile(name).is_none() {
                return Err(CliError::ProfileNotFound { name: name.clone() });
            }
            updated.save_config()?;

            println!("Profile '{}' removed", name);
            Ok(())
        }

        ProfileCommands::Default { name } => {
            // Validate before persisting
            conn_mgr.config.profile(name)?;

            let mut updated = conn_mgr.clone();
            updated.config.default_profile = Some(name.clone());
            updated.save_config()?;

            println!("Default profile set to '{}'", name);
            Ok(())
        }

        ProfileCommands::Path => {
            let path = match &conn_mgr.config_path {
                Some(path) => path.clone(),
                None => Config::config_path()?,
            };
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn print_result(value: serde_json::Value, output: OutputFormat) -> CliResult<()> {
    print_output(value, output).map_err(|e| CliError::OutputError {
        message: e.to_string(),
    })
}
