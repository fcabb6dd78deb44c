use crate::cli::Cli;
use crate::error::{Result, TfeError};

/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Runs endpoint
    pub const RUNS: &str = "runs";

    /// Plans endpoint
    pub const PLANS: &str = "plans";

    /// Applies endpoint
    pub const APPLIES: &str = "applies";

    /// OAuth clients endpoint
    pub const OAUTH_CLIENTS: &str = "oauth-clients";

    /// Variable sets endpoint
    pub const VARSETS: &str = "varsets";

    /// Workspace variables endpoint (nested under a workspace)
    pub const VARS: &str = "vars";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Bytes requested per read when draining a log stream
    pub const LOG_READ_CHUNK_SIZE: usize = 1000;

    /// Total attempts (first try included) for retried requests
    pub const RETRY_MAX_ATTEMPTS: u32 = 5;

    /// First backoff delay in milliseconds, doubled on each retry
    pub const RETRY_WAIT_MIN_MS: u64 = 100;

    /// Upper bound for a single backoff delay in milliseconds
    pub const RETRY_WAIT_MAX_MS: u64 = 400;
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable holding the service address
    pub const URL_ENV: &str = "TFE_URL";

    /// Environment variable holding the API token
    pub const TOKEN_ENV: &str = "TFE_TOKEN";

    /// Environment variable holding the organization
    pub const ORG_ENV: &str = "TFE_ORG";
}

/// Immutable settings for one invocation, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service address including scheme, without trailing slash
    pub address: String,
    pub token: String,
    pub organization: Option<String>,
    /// Retry requests that fail with 5xx or 429
    pub retry_server_errors: bool,
}

impl Config {
    /// Build configuration from already-parsed CLI arguments
    ///
    /// Flags win over environment variables (clap resolves both). A missing
    /// address or token is a configuration error.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(
            cli.tfe_url.as_deref(),
            cli.tfe_token.as_deref(),
            cli.tfe_org.as_deref(),
            !cli.no_retry,
        )
    }

    pub fn new(
        address: Option<&str>,
        token: Option<&str>,
        organization: Option<&str>,
        retry_server_errors: bool,
    ) -> Result<Self> {
        let address = non_empty(address).ok_or_else(|| {
            TfeError::Config(format!(
                "{} or {} are missing",
                defaults::TOKEN_ENV,
                defaults::URL_ENV
            ))
        })?;
        let token = non_empty(token).ok_or_else(|| {
            TfeError::Config(format!(
                "{} or {} are missing",
                defaults::TOKEN_ENV,
                defaults::URL_ENV
            ))
        })?;

        Ok(Self {
            address: normalize_address(address),
            token: token.to_string(),
            organization: non_empty(organization).map(str::to_string),
            retry_server_errors,
        })
    }

    /// Base URL for API requests
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.address, api::BASE_PATH)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Add an https scheme to bare hosts and drop trailing slashes
fn normalize_address(address: &str) -> String {
    let trimmed = address.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
