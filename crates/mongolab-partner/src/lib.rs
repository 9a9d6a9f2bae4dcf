//! Client library for the MongoLab Partner Management API.
//!
//! MongoLab's partner programme lets a provider create partner accounts
//! under its own master account and provision MongoDB databases for each
//! of them. This crate wraps the versioned REST endpoint behind
//! [`PartnerClient`] and ships the profile configuration used by the
//! `mongolabctl` binary.
//!
//! # Example
//!
//! ```no_run
//! use mongolab_partner::PartnerClient;
//! use serde_json::json;
//!
//! # async fn run() -> mongolab_partner::Result<()> {
//! let client = PartnerClient::builder()
//!     .account_name("acme")
//!     .username("info@acme.example")
//!     .password("secret")
//!     .build()?;
//!
//! // Partner account names are qualified with "acme_" automatically.
//! let account = client.create_account(json!({
//!     "name": "customer42",
//!     "adminUser": { "email": "user@customer.example" },
//! })).await?;
//!
//! let database = client.add_database(
//!     account["name"].as_str().unwrap_or_default(),
//!     json!({ "name": "acme_customer42_main", "plan": "free" }),
//! ).await?;
//! println!("connect via {}", database["uri"]);
//! # Ok(())
//! # }
//! ```
//!
//! Responses are decoded into [`serde_json::Value`]; callers pick out
//! the fields they need rather than binding to a response schema.

pub mod client;
pub mod config;
pub mod error;

pub use client::{PartnerClient, PartnerClientBuilder, DEFAULT_API_URL};
pub use config::{Config, ConfigError, Profile};
pub use error::{PartnerError, Result};
