//! Configuration and profile management for `mongolabctl`.
//!
//! Configuration is stored in TOML with support for multiple named
//! profiles, one per MongoLab master account. Values in the file may
//! reference environment variables with `${VAR}` syntax.
//!
//! ```toml
//! default_profile = "acme"
//!
//! [profiles.acme]
//! account = "acme"
//! username = "info@acme.example"
//! password = "${MONGOLAB_PASSWORD}"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::DEFAULT_API_URL;

/// Errors that can occur during configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config from {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save config to {path}: {source}")]
    SaveError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("No profiles configured. {suggestion}")]
    NoProfiles { suggestion: String },

    #[error("Failed to determine config directory")]
    ConfigDirError,
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Profile used when none is specified on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Credentials and endpoint for one MongoLab master account
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Profile {
    /// Master account name, e.g. `acme`
    pub account: String,
    /// Username for HTTP Basic authentication
    pub username: String,
    /// Password; optional so it can be prompted for interactively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Endpoint base, before API version substitution
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file is not an error; it yields the default (empty)
    /// configuration so first runs work without setup.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        let expanded_content = Self::expand_env_vars(&content);

        let config: Config = toml::from_str(&expanded_content)?;
        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Path to the configuration file
    /// (`~/.config/mongolabctl/config.toml` on Linux)
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("io", "orchestra", "mongolabctl").ok_or(ConfigError::ConfigDirError)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile by name, clearing the default if it pointed here
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// All profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Look up a profile by name
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Resolve the profile to use for a command.
    ///
    /// Resolution order: explicitly named profile, then the configured
    /// default, then the alphabetically first profile.
    pub fn resolve_profile(&self, explicit_profile: Option<&str>) -> Result<String> {
        if let Some(profile_name) = explicit_profile {
            return Ok(profile_name.to_string());
        }

        if let Some(ref default) = self.default_profile {
            return Ok(default.clone());
        }

        let mut names: Vec<_> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        match names.first() {
            Some(name) => Ok((*name).to_string()),
            None => Err(ConfigError::NoProfiles {
                suggestion: "Use 'mongolabctl profile set' to create a profile.".to_string(),
            }),
        }
    }

    /// Expand `${VAR}` and `${VAR:-default}` references in configuration
    /// content. Unset variables are left as-is so profiles that are not
    /// in use do not need their environment present.
    fn expand_env_vars(content: &str) -> String {
        let expanded =
            shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok());
        expanded.to_string()
    }
}
