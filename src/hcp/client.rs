//! TFE HTTP client for API interactions

use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

use crate::config::{api, Config};
use crate::error::{Result, TfeError};
use crate::hcp::DataResponse;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    base_url: String,
    /// Retry 5xx and 429 responses with backoff
    retry_server_errors: bool,
}

impl TfeClient {
    /// Create a new TFE client from the invocation configuration
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: config.token.clone(),
            base_url: config.api_base_url(),
            retry_server_errors: config.retry_server_errors,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, base_url: String, retry_server_errors: bool) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url,
            retry_server_errors,
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a GET request builder without credentials
    ///
    /// Log read URLs are pre-authenticated and live on another host.
    pub(crate) fn get_unauthenticated(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Send a request, retrying server errors when enabled
    ///
    /// This is the only place where anything is retried. Callers see the
    /// final response, successful or not.
    pub(crate) async fn send(&self, mut builder: RequestBuilder) -> Result<Response> {
        let mut attempt = 1;

        loop {
            let next = if self.retry_server_errors && attempt < api::RETRY_MAX_ATTEMPTS {
                builder.try_clone()
            } else {
                None
            };

            let response = builder.send().await?;
            let status = response.status();

            match next {
                Some(retry) if is_retryable(status) => {
                    let wait = backoff(attempt);
                    warn!(
                        "Request to {} returned {}, retrying in {}ms (attempt {}/{})",
                        response.url(),
                        status,
                        wait.as_millis(),
                        attempt + 1,
                        api::RETRY_MAX_ATTEMPTS
                    );
                    tokio::time::sleep(wait).await;
                    builder = retry;
                    attempt += 1;
                }
                _ => return Ok(response),
            }
        }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(api_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Fetch a single resource by API path
    ///
    /// Returns None for 404 so callers can turn it into a typed not-found
    /// error; any other failure status is an API error.
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.send(self.get(&url)).await?;

        match response.status().as_u16() {
            200 => {
                let body = response.bytes().await?;
                let document: DataResponse<T> = serde_json::from_slice(&body).map_err(|e| {
                    TfeError::Json(format!("Failed to parse {}: {}", resource_label, e))
                })?;
                Ok(Some(document.data))
            }
            404 => Ok(None),
            _ => Err(api_error(response, &format!("fetch {}", resource_label)).await),
        }
    }
}

/// Build an API error carrying the response body verbatim
pub(crate) async fn api_error(response: Response, action: &str) -> TfeError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        format!("Failed to {}", action)
    } else {
        format!("Failed to {}: {}", action, body)
    };
    TfeError::Api { status, message }
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Capped exponential backoff for the given (1-based) attempt
fn backoff(attempt: u32) -> Duration {
    let factor = 1u64 << (attempt.saturating_sub(1)).min(16);
    let wait = api::RETRY_WAIT_MIN_MS.saturating_mul(factor);
    Duration::from_millis(wait.min(api::RETRY_WAIT_MAX_MS))
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL and retries disabled
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string(), false)
    }
}
