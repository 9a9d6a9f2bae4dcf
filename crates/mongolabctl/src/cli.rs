//! CLI structure and command definitions
//!
//! Defines the command-line interface using clap with two layers:
//! 1. Raw API access (`api` commands)
//! 2. Human-friendly interface (`account`/`database` commands)

use clap::{Parser, Subcommand};

/// MongoLab partner management CLI
#[derive(Parser, Debug)]
#[command(name = "mongolabctl")]
#[command(
    version,
    about = "Manage MongoLab partner accounts and databases from the command line"
)]
#[command(long_about = "
Manage MongoLab partner accounts and databases from the command line

EXAMPLES:
    # Set up a profile for your master account
    mongolabctl profile set acme --account acme --username info@acme.example

    # List partner accounts
    mongolabctl account list

    # Create a partner account (the master prefix is added automatically)
    mongolabctl account create --data '{\"name\":\"customer42\"}'

    # Provision a database for a partner account
    mongolabctl database add acme_customer42 --data '{\"name\":\"acme_customer42_main\",\"plan\":\"free\"}'

    # Direct API access
    mongolabctl api get /partners/acme/accounts

For more help on a specific command, run:
    mongolabctl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "MONGOLAB_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "MONGOLAB_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "json")]
    pub output: crate::output::OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Partner account operations
    #[command(subcommand, visible_alias = "acct")]
    #[command(after_help = "EXAMPLES:
    # List all partner accounts under the master account
    mongolabctl account list

    # Show one account, optionally with its databases
    mongolabctl account get acme_customer42
    mongolabctl account get acme_customer42 --with-databases

    # Create an account from inline JSON or a file
    mongolabctl account create --data '{\"name\":\"customer42\"}'
    mongolabctl account create --data @account.json

    # Update and delete
    mongolabctl account update acme_customer42 --data '{\"contactEmail\":\"ops@customer.example\"}'
    mongolabctl account delete acme_customer42
")]
    Account(AccountCommands),

    /// Partner database operations
    #[command(subcommand, visible_alias = "db")]
    #[command(after_help = "EXAMPLES:
    # List databases for a partner account
    mongolabctl database list acme_customer42

    # Provision a database
    mongolabctl database add acme_customer42 --data '{\"name\":\"acme_customer42_main\",\"plan\":\"free\"}'

    # Delete a database
    mongolabctl database delete acme_customer42 acme_customer42_main
")]
    Database(DatabaseCommands),

    /// Raw API access - direct REST endpoint calls
    #[command(name = "api")]
    #[command(after_help = "EXAMPLES:
    # GET request
    mongolabctl api get /partners/acme/accounts

    # POST request with JSON data
    mongolabctl api post /partners/acme/accounts --data '{\"name\":\"acme_customer42\"}'

    # POST request from file
    mongolabctl api post /partners/acme/accounts --data @account.json

    # YAML output for reading
    mongolabctl api get /partners/acme/accounts -o yaml
")]
    Api {
        /// HTTP method
        #[arg(value_parser = parse_http_method)]
        method: HttpMethod,

        /// API endpoint path (e.g., /partners/acme/accounts)
        path: String,

        /// Request body (JSON string or @file)
        #[arg(long)]
        data: Option<String>,
    },

    /// Profile management
    #[command(subcommand, visible_alias = "prof")]
    #[command(after_help = "EXAMPLES:
    # Create a profile (prompts for the password)
    mongolabctl profile set acme --account acme --username info@acme.example

    # Create a profile non-interactively
    mongolabctl profile set acme --account acme --username info@acme.example --password secret

    # List all profiles
    mongolabctl profile list

    # Show profile details
    mongolabctl profile show acme

    # Set the default profile
    mongolabctl profile default acme
")]
    Profile(ProfileCommands),

    /// Version information
    #[command(visible_alias = "ver")]
    Version,
}

/// Partner account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// List all partner accounts
    List,

    /// Show a partner account
    Get {
        /// Partner account name
        name: String,

        /// Also fetch the account's databases
        #[arg(long)]
        with_databases: bool,
    },

    /// Create a partner account
    Create {
        /// Account payload (JSON string or @file)
        #[arg(long)]
        data: String,
    },

    /// Update a partner account
    Update {
        /// Partner account name
        name: String,

        /// Updated fields (JSON string or @file)
        #[arg(long)]
        data: String,
    },

    /// Delete a partner account
    Delete {
        /// Partner account name
        name: String,
    },
}

/// Partner database subcommands
#[derive(Subcommand, Debug)]
pub enum DatabaseCommands {
    /// List databases under a partner account
    List {
        /// Partner account name
        account: String,
    },

    /// Provision a database under a partner account
    Add {
        /// Partner account name
        account: String,

        /// Database payload (JSON string or @file)
        #[arg(long)]
        data: String,
    },

    /// Delete a database under a partner account
    Delete {
        /// Partner account name
        account: String,

        /// Database name
        db_name: String,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all configured profiles
    List,

    /// Show profile details
    Show {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,

        /// Master account name
        #[arg(long)]
        account: String,

        /// Username for HTTP Basic authentication
        #[arg(long)]
        username: String,

        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Override the API endpoint base
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Remove a profile
    Remove {
        /// Profile name
        name: String,
    },

    /// Set the default profile
    Default {
        /// Profile name
        name: String,
    },

    /// Show the configuration file path
    Path,
}

/// HTTP methods for raw API access
#[derive(Debug, Clone)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Parse HTTP method case-insensitively
fn parse_http_method(s: &str) -> Result<HttpMethod, String> {
    match s.to_lowercase().as_str() {
        "get" => Ok(HttpMethod::Get),
        "post" => Ok(HttpMethod::Post),
        "put" => Ok(HttpMethod::Put),
        "delete" => Ok(HttpMethod::Delete),
        _ => Err(format!(
            "invalid HTTP method '{}' (expected get, post, put, or delete)",
            s
        )),
    }
}
