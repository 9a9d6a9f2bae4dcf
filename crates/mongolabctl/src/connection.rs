//! Connection management for the MongoLab Partner API client

use crate::error::Result as CliResult;
use anyhow::Context;
use mongolab_partner::{Config, PartnerClient};
use tracing::{debug, info, trace};

/// User agent string for mongolabctl HTTP requests
const MONGOLABCTL_USER_AGENT: &str = concat!("mongolabctl/", env!("CARGO_PKG_VERSION"));

/// Connection manager for creating authenticated clients
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<std::path::PathBuf>,
}

impl ConnectionManager {
    /// Create a new connection manager with a custom config path
    pub fn with_config_path(config: Config, config_path: Option<std::path::PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Save the configuration to the appropriate location
    pub fn save_config(&self) -> CliResult<()> {
        if let Some(ref path) = self.config_path {
            self.config
                .save_to_path(path)
                .context("Failed to save configuration")?;
        } else {
            self.config.save().context("Failed to save configuration")?;
        }
        Ok(())
    }

    /// Create a partner client from profile credentials with environment
    /// variable override support.
    ///
    /// When --config-file is explicitly specified, environment variables are
    /// ignored to provide true configuration isolation. This allows testing
    /// with isolated configs and follows the principle of "explicit wins"
    /// (CLI args > env vars > defaults).
    pub fn create_client(&self, profile_name: Option<&str>) -> CliResult<PartnerClient> {
        debug!("Creating MongoLab partner client");
        trace!("Profile name: {:?}", profile_name);

        let use_env_vars = self.config_path.is_none();
        if !use_env_vars {
            info!("--config-file specified explicitly, ignoring environment variables");
        }

        let env_account = if use_env_vars {
            std::env::var("MONGOLAB_ACCOUNT").ok()
        } else {
            None
        };
        let env_username = if use_env_vars {
            std::env::var("MONGOLAB_USERNAME").ok()
        } else {
            None
        };
        let env_password = if use_env_vars {
            std::env::var("MONGOLAB_PASSWORD").ok()
        } else {
            None
        };
        let env_api_url = if use_env_vars {
            std::env::var("MONGOLAB_API_URL").ok()
        } else {
            None
        };

        if env_account.is_some() {
            debug!("Found MONGOLAB_ACCOUNT environment variable");
        }
        if env_username.is_some() {
            debug!("Found MONGOLAB_USERNAME environment variable");
        }
        if env_password.is_some() {
            debug!("Found MONGOLAB_PASSWORD environment variable");
        }
        if env_api_url.is_some() {
            debug!("Found MONGOLAB_API_URL environment variable");
        }

        let (account, username, password, api_url) = if let (
            Some(account),
            Some(username),
            Some(password),
        ) =
            (&env_account, &env_username, &env_password)
        {
            // Environment variables provide complete credentials
            info!("Using MongoLab credentials from environment variables");
            let api_url = env_api_url
                .clone()
                .unwrap_or_else(|| mongolab_partner::DEFAULT_API_URL.to_string());
            (
                account.clone(),
                username.clone(),
                password.clone(),
                api_url,
            )
        } else {
            let resolved_profile_name = self.config.resolve_profile(profile_name)?;
            info!("Using MongoLab profile: {}", resolved_profile_name);

            let profile = self.config.profile(&resolved_profile_name)?;
            let password = profile.password.clone().ok_or_else(|| {
                crate::error::CliError::Configuration(format!(
                    "Profile '{}' has no password configured",
                    resolved_profile_name
                ))
            })?;

            // Allow partial environment variable overrides
            let has_overrides = env_account.is_some()
                || env_username.is_some()
                || env_password.is_some()
                || env_api_url.is_some();

            let account = env_account.unwrap_or_else(|| profile.account.clone());
            let username = env_username.unwrap_or_else(|| profile.username.clone());
            let password = env_password.unwrap_or(password);
            let api_url = env_api_url.unwrap_or_else(|| profile.api_url.clone());

            if has_overrides {
                debug!("Applied partial environment variable overrides");
            }

            (account, username, password, api_url)
        };

        info!("Connecting to MongoLab API: {}", api_url);
        debug!("Master account: {}", account);
        debug!("Username: {}", username);

        let client = PartnerClient::builder()
            .account_name(account)
            .base_url(api_url)
            .username(username)
            .password(password)
            .user_agent(MONGOLABCTL_USER_AGENT)
            .build()
            .context("Failed to create MongoLab partner client")?;

        debug!("MongoLab partner client created successfully");
        Ok(client)
    }
}
