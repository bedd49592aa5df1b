//! Fetch client with base URL, default headers and per-dependency timeouts.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dependency::DependencyTag;
use crate::FetchError;

/// HTTP client for JSON APIs.
///
/// A thin wrapper around `reqwest::Client` that resolves relative paths
/// against a base URL and applies a timeout chosen by dependency tag.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeouts: HashMap<DependencyTag, Duration>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: None,
            default_headers: HashMap::new(),
            timeouts: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Override the timeout for one dependency.
    pub fn with_timeout(mut self, tag: DependencyTag, timeout: Duration) -> Self {
        self.timeouts.insert(tag, timeout);
        self
    }

    /// Timeout applied to requests tagged `tag`.
    pub fn timeout_for(&self, tag: DependencyTag) -> Duration {
        self.timeouts
            .get(&tag)
            .copied()
            .unwrap_or_else(|| tag.default_timeout())
    }

    /// Resolve `url` against the base URL.
    ///
    /// Absolute `http://` and `https://` URLs are used as-is.
    pub fn url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url.to_string(),
        }
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Non-2xx statuses become [`FetchError::HttpError`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        tag: DependencyTag,
    ) -> Result<T, FetchError> {
        let url = self.url(url);
        let timeout = self.timeout_for(tag);

        let mut request = self.client.get(url.as_str()).timeout(timeout);
        for (key, value) in &self.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        debug!(dependency = %tag, url = %url, "fetching");

        let response = request.send().await.map_err(|e| request_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| request_error(&url, e))?;
        let value = serde_json::from_slice(&body)?;
        Ok(value)
    }
}

fn request_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::RequestError(e.to_string())
    }
}
