//! HTTP client for the MongoLab Partner Management API.
//!
//! One client per master account: the account name is baked into every
//! resource path (`/partners/{account}/accounts/...`) and into the
//! qualified names of partner accounts created through it.

use std::time::Duration;

use reqwest::{Method, StatusCode, header};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{PartnerError, Result};

/// Base of the MongoLab API endpoint, before version substitution.
pub const DEFAULT_API_URL: &str = "https://mongolab.com/api";

/// API version substituted into the endpoint at construction time.
const API_VERSION: u32 = 1;

/// User agent sent with every request unless overridden via the builder.
const USER_AGENT: &str = concat!("mongolab-partner/", env!("CARGO_PKG_VERSION"));

/// Client for the MongoLab Partner Management API.
///
/// Cheap to clone (the underlying transport is shared). Credentials must
/// be supplied through the builder or [`set_auth`](Self::set_auth) before
/// issuing requests; there is no guard, and an unauthenticated request
/// goes out without an `Authorization` header and will be rejected
/// upstream.
///
/// No retries, no timeouts beyond what [`PartnerClientBuilder::timeout`]
/// configures on the transport.
#[derive(Debug, Clone)]
pub struct PartnerClient {
    http: reqwest::Client,
    /// Versioned endpoint, e.g. `https://mongolab.com/api/1`.
    endpoint: String,
    account_name: String,
    credentials: Option<(String, String)>,
}

/// Builder for [`PartnerClient`]
#[derive(Debug, Default)]
pub struct PartnerClientBuilder {
    account_name: Option<String>,
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl PartnerClientBuilder {
    /// Set the master account name (required)
    pub fn account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = Some(account_name.into());
        self
    }

    /// Override the endpoint base (defaults to [`DEFAULT_API_URL`]).
    /// The API version is still appended to whatever base is given.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Username for HTTP Basic authentication
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Password for HTTP Basic authentication
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Override the user agent string
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Request timeout on the underlying transport (none by default)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client. Performs no I/O.
    pub fn build(self) -> Result<PartnerClient> {
        let account_name = self
            .account_name
            .ok_or_else(|| PartnerError::Config("account name is required".to_string()))?;

        let mut http = reqwest::Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| USER_AGENT.to_string()),
        );
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build()?;

        let base = self
            .base_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let endpoint = format!("{}/{}", base.trim_end_matches('/'), API_VERSION);

        let credentials = match (self.username, self.password) {
            (Some(username), Some(password)) => Some((username, password)),
            (None, None) => None,
            _ => {
                return Err(PartnerError::Config(
                    "username and password must be provided together".to_string(),
                ));
            }
        };

        Ok(PartnerClient {
            http,
            endpoint,
            account_name,
            credentials,
        })
    }
}

impl PartnerClient {
    /// Create a client for the given master account against the default
    /// endpoint, with no credentials. Performs no I/O.
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/{}", DEFAULT_API_URL, API_VERSION),
            account_name: account_name.into(),
            credentials: None,
        }
    }

    /// Start building a client
    pub fn builder() -> PartnerClientBuilder {
        PartnerClientBuilder::default()
    }

    /// Store Basic-auth credentials for all subsequent requests.
    ///
    /// Works for both a partner and a plain user; MongoLab treats them
    /// the same way.
    pub fn set_auth(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.credentials = Some((username.into(), password.into()));
    }

    /// The master account name this client operates under
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// The resolved, versioned endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// List all partner accounts under the master account.
    ///
    /// Ordering is whatever the server returns; nothing is guaranteed.
    pub async fn list_accounts(&self) -> Result<Value> {
        self.get_raw(&format!("/partners/{}/accounts", self.account_name))
            .await
    }

    /// Fetch a single partner account
    pub async fn get_account(&self, name: &str) -> Result<Value> {
        self.get_raw(&format!(
            "/partners/{}/accounts/{}",
            self.account_name, name
        ))
        .await
    }

    /// List the databases provisioned under a partner account
    pub async fn account_databases(&self, name: &str) -> Result<Value> {
        self.get_raw(&format!(
            "/partners/{}/accounts/{}/databases",
            self.account_name, name
        ))
        .await
    }

    /// Fetch a partner account together with its databases.
    ///
    /// Issues two requests and attaches the database list as a
    /// `databases` field on the account object; the field is JSON null
    /// when the account has no databases yet.
    pub async fn get_account_with_databases(&self, name: &str) -> Result<Value> {
        let mut account = self.get_account(name).await?;
        let databases = match self.account_databases(name).await? {
            Value::Array(items) if items.is_empty() => Value::Null,
            other => other,
        };
        if let Value::Object(fields) = &mut account {
            fields.insert("databases".to_string(), databases);
        }
        Ok(account)
    }

    /// Provision a new partner account.
    ///
    /// MongoLab requires partner account names to be prefixed with the
    /// master account name; a `name` field lacking the `{account}_`
    /// prefix is rewritten before sending. This is normalization, not
    /// validation: a missing `name` is passed through untouched and left
    /// for the API to reject.
    ///
    /// On success the returned object includes the generated admin
    /// credentials under `adminUser`.
    pub async fn create_account(&self, mut data: Value) -> Result<Value> {
        self.qualify_name(&mut data);
        self.post_raw(&format!("/partners/{}/accounts", self.account_name), data)
            .await
    }

    /// Provision a database under an existing partner account.
    ///
    /// `data` carries the upstream fields (`name`, `plan`, `username`,
    /// ...); the returned object includes the connection `uri`.
    pub async fn add_database(&self, partner_account_name: &str, data: Value) -> Result<Value> {
        self.post_raw(
            &format!(
                "/partners/{}/accounts/{}/databases",
                self.account_name, partner_account_name
            ),
            data,
        )
        .await
    }

    /// Update a partner account, returning the updated resource
    pub async fn update_account(&self, id: &str, data: Value) -> Result<Value> {
        self.put_raw(
            &format!("/partners/{}/accounts/{}", self.account_name, id),
            data,
        )
        .await
    }

    /// Delete a partner account
    pub async fn delete_account(&self, name: &str) -> Result<Value> {
        self.delete_raw(&format!(
            "/partners/{}/accounts/{}",
            self.account_name, name
        ))
        .await
    }

    /// Delete a specific database under a partner account
    pub async fn delete_database(&self, name: &str, db_name: &str) -> Result<Value> {
        self.delete_raw(&format!(
            "/partners/{}/accounts/{}/databases/{}",
            self.account_name, name, db_name
        ))
        .await
    }

    /// GET an arbitrary API path
    pub async fn get_raw(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None).await
    }

    /// POST a JSON body to an arbitrary API path
    pub async fn post_raw(&self, path: &str, body: Value) -> Result<Value> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body to an arbitrary API path
    pub async fn put_raw(&self, path: &str, body: Value) -> Result<Value> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// DELETE an arbitrary API path
    pub async fn delete_raw(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None).await
    }

    /// Rewrite `data["name"]` to carry the `{account}_` prefix when it
    /// does not already (case-insensitively) start with it.
    fn qualify_name(&self, data: &mut Value) {
        let prefix = format!("{}_", self.account_name);
        let qualified = match data.get("name").and_then(Value::as_str) {
            Some(name)
                if !name
                    .to_lowercase()
                    .starts_with(&prefix.to_lowercase()) =>
            {
                format!("{}{}", prefix, name)
            }
            _ => return,
        };
        debug!(name = %qualified, "qualified partner account name");
        data["name"] = Value::String(qualified);
    }

    /// Issue a request and decode the response.
    ///
    /// The API signals success with exactly 200; anything else is an
    /// [`PartnerError::Api`] carrying the raw body. One legacy endpoint
    /// answers a successful DELETE with the bare text `OK` instead of
    /// JSON, which decodes to the JSON string `"OK"`.
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = format!("{}{}", self.endpoint, path);
        debug!(%method, %url, "sending partner API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some((username, password)) = &self.credentials {
            request = request.basic_auth(username, Some(password));
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        trace!(status = status.as_u16(), body = %text, "partner API response");

        if status != StatusCode::OK {
            return Err(PartnerError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        if text == "OK" {
            return Ok(Value::String("OK".to_string()));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
