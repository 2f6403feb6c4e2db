//! HTTP transport for outbound platform API calls.

use async_trait::async_trait;
use reqwest::Client;
use skillkit_core::BoxError;
use std::{fmt, time::Duration};

/// Default request timeout for [`ReqwestApiClient`].
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Environment variable read by [`ReqwestApiClient::from_env`].
pub const API_TIMEOUT_ENV: &str = "SKILLKIT_API_TIMEOUT_SECS";

/// HTTP method of an [`ApiClientRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// A transport-level request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientRequest {
    /// Method.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Header name/value pairs, in order.
    pub headers: Vec<(String, String)>,
    /// Body, if any.
    pub body: Option<String>,
}

impl ApiClientRequest {
    /// A request with no headers and no body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The first value of the named header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A transport-level response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body text; empty when the server sent none.
    pub body: String,
}

impl ApiClientResponse {
    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends HTTP requests on behalf of the service clients.
#[async_trait]
pub trait ApiClient: Send + Sync + 'static {
    /// Sends the request. Non-2xx statuses are not errors at this level.
    async fn invoke(&self, request: ApiClientRequest) -> Result<ApiClientResponse, BoxError>;
}

/// [`ApiClient`] backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestApiClient {
    client: Client,
}

impl ReqwestApiClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// Create a client from environment variables.
    ///
    /// Reads the timeout in seconds from `SKILLKIT_API_TIMEOUT_SECS`, falling
    /// back to [`DEFAULT_API_TIMEOUT_SECS`] if unset or unparsable.
    pub fn from_env() -> Self {
        let secs = std::env::var(API_TIMEOUT_ENV)
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);
        Self::new(Duration::from_secs(secs))
    }
}

impl Default for ReqwestApiClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_API_TIMEOUT_SECS))
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn invoke(&self, request: ApiClientRequest) -> Result<ApiClientResponse, BoxError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiClientResponse { status, body })
    }
}
