//!
//! ```rust,ignore
//! // 1. Using the builder with explicit configuration
//! let jira = Jira::builder()
//!     .host("https://jira.example.com")
//!     .basic_auth("username", "password")
//!     .timeout(30)
//!     .build()
//!     .expect("Failed to create Jira client");
//!
//! // 2. Using environment variables
//! let jira = Jira::builder()
//!     .from_env()
//!     .build()
//!     .expect("Failed to create Jira client");
//!
//! // 3. Direct shortcut for environment variables
//! let jira = JiraBuilder::create_from_env()
//!     .expect("Failed to create Jira client");
//!
//! // 4. Defaults only
//! let jira = Jira::new(
//!     "https://jira.example.com",
//!     Credentials::new("username", "password"),
//! ).expect("Failed to create Jira client");
//! ```
use crate::{Credentials, Jira, DEFAULT_ACTIVITY_PATH, DEFAULT_AGILE_PATH, DEFAULT_API_PATH};
use log::debug;
use reqwest::Client;
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Error type for JiraBuilder operations
#[derive(Error, Debug)]
pub enum JiraBuilderError {
    #[error("Environment variable {0} not set")]
    EnvVarNotSet(String),

    #[error("URL parsing error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Jira client initialization error: {0}")]
    ClientInitError(String),

    #[error("Timeout must be positive")]
    InvalidTimeout,
}

/// Names of the environment variables read by [`JiraBuilder::from_env`]
pub struct JiraEnvVars;

impl JiraEnvVars {
    pub const HOST: &'static str = "JIRA_HOST";
    pub const USER: &'static str = "JIRA_USER";
    pub const PASSWORD: &'static str = "JIRA_PASSWORD";
    pub const API_PATH: &'static str = "JIRA_API_PATH";
    pub const ACTIVITY_PATH: &'static str = "JIRA_ACTIVITY_PATH";
    pub const DEBUG: &'static str = "JIRA_DEBUG";
}

/// Builder for creating Jira client instances with flexible configuration options
pub struct JiraBuilder {
    host: Option<String>,
    api_path: Option<String>,
    activity_path: Option<String>,
    agile_path: Option<Option<String>>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
    debug: bool,
    client_config: Option<Box<dyn Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder>>,
}

impl Default for JiraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JiraBuilder {
    /// Creates a new JiraBuilder with default configuration
    pub fn new() -> Self {
        Self {
            host: None,
            api_path: None,
            activity_path: None,
            agile_path: None,
            credentials: None,
            timeout: None,
            debug: false,
            client_config: None,
        }
    }

    /// Sets the Jira host URL
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the REST API path (default is `/rest/api/latest`)
    pub fn api_path(mut self, path: impl Into<String>) -> Self {
        self.api_path = Some(path.into());
        self
    }

    /// Sets the activity stream path (default is `/activity`)
    pub fn activity_path(mut self, path: impl Into<String>) -> Self {
        self.activity_path = Some(path.into());
        self
    }

    /// Sets the alternate API root serving boards and sprints
    /// (default is `/rest/greenhopper/latest`)
    pub fn agile_path(mut self, path: impl Into<String>) -> Self {
        self.agile_path = Some(Some(path.into()));
        self
    }

    /// For instances without the agile API; sprint calls will fail
    pub fn no_agile(mut self) -> Self {
        self.agile_path = Some(None);
        self
    }

    /// Sets basic authentication credentials
    pub fn basic_auth(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(login, password));
        self
    }

    /// Sets a request timeout, covering connect, send and reading the body.
    ///
    /// Without it requests wait as long as the server and the network let them.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Logs URLs and bodies at `info` rather than `trace`
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Advanced configuration of the underlying reqwest client
    pub fn configure_client<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + 'static,
    {
        self.client_config = Some(Box::new(config_fn));
        self
    }

    /// Attempts to load configuration from environment variables
    pub fn from_env(self) -> Self {
        let host = env::var(JiraEnvVars::HOST).ok();
        let user = env::var(JiraEnvVars::USER).ok();
        let password = env::var(JiraEnvVars::PASSWORD).ok();
        let api_path = env::var(JiraEnvVars::API_PATH).ok();
        let activity_path = env::var(JiraEnvVars::ACTIVITY_PATH).ok();
        let debug = env::var(JiraEnvVars::DEBUG).ok();

        let mut builder = self;

        if let Some(host) = host {
            builder = builder.host(host);
        }

        if let Some(api_path) = api_path {
            builder = builder.api_path(api_path);
        }

        if let Some(activity_path) = activity_path {
            builder = builder.activity_path(activity_path);
        }

        if let (Some(user), Some(password)) = (user, password) {
            builder = builder.basic_auth(user, password);
        }

        if let Some(debug) = debug {
            builder = builder.debug(matches!(debug.as_str(), "1" | "true" | "yes"));
        }

        builder
    }

    /// Builds a Jira client instance with the configured parameters
    pub fn build(self) -> Result<Jira, JiraBuilderError> {
        // Validate and extract required parameters
        let host = self
            .host
            .ok_or_else(|| JiraBuilderError::EnvVarNotSet(JiraEnvVars::HOST.to_string()))?;

        let credentials = self.credentials.ok_or_else(|| {
            JiraBuilderError::EnvVarNotSet(format!(
                "{} and {}",
                JiraEnvVars::USER,
                JiraEnvVars::PASSWORD
            ))
        })?;

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(JiraBuilderError::InvalidTimeout);
        }

        let host_url = Url::parse(&host)?;

        // Create the HTTP client with a proper configuration
        let mut client_builder = Client::builder();

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(config_fn) = self.client_config {
            client_builder = config_fn(client_builder);
        }

        let client = client_builder
            .build()
            .map_err(|e| JiraBuilderError::ClientInitError(e.to_string()))?;

        let jira = Jira {
            host: host_url,
            api_path: self.api_path.unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
            activity_path: self
                .activity_path
                .unwrap_or_else(|| DEFAULT_ACTIVITY_PATH.to_string()),
            agile_path: self
                .agile_path
                .unwrap_or_else(|| Some(DEFAULT_AGILE_PATH.to_string())),
            credentials,
            debug: self.debug,
            client,
        };
        debug!("Created Jira client: {:#?}", jira);

        Ok(jira)
    }

    /// Convenience method to create a Jira client from environment variables
    pub fn create_from_env() -> Result<Jira, JiraBuilderError> {
        Self::new().from_env().build()
    }
}

impl Jira {
    /// Create a Jira client builder
    pub fn builder() -> JiraBuilder {
        JiraBuilder::new()
    }
}
