//! Authenticated JSON calls against the platform API.

use super::client::{ApiClient, ApiClientRequest, HttpMethod};
use serde::{Serialize, de::DeserializeOwned};
use skillkit_core::BoxError;
use std::sync::Arc;
use thiserror::Error;

/// Errors from outbound service calls.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("service returned status {status}: {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body, as sent.
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A request or response body was not valid JSON for its type.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The request envelope lacks the API endpoint or access token.
    #[error("request context has no API endpoint or access token")]
    MissingContext,
}

/// Shared plumbing for the service clients: endpoint, bearer auth, JSON
/// bodies and status checking.
#[derive(Clone)]
pub struct BaseServiceClient {
    api_client: Arc<dyn ApiClient>,
    api_endpoint: String,
    access_token: String,
}

impl BaseServiceClient {
    /// Create a client for `api_endpoint`, authenticating with `access_token`.
    pub fn new(
        api_client: Arc<dyn ApiClient>,
        api_endpoint: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            api_client,
            api_endpoint: api_endpoint.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// The base URL paths are resolved against.
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Sends a bodiless request and decodes the JSON response.
    ///
    /// An empty response body decodes as JSON `null`, so `R = ()` accepts a
    /// 204.
    pub async fn call<R>(&self, method: HttpMethod, path: &str) -> Result<R, ServiceError>
    where
        R: DeserializeOwned,
    {
        self.send(method, path, None).await
    }

    /// Sends `body` as JSON and decodes the JSON response.
    pub async fn call_with_body<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        self.send(method, path, Some(body)).await
    }

    async fn send<R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ServiceError>
    where
        R: DeserializeOwned,
    {
        let mut request = ApiClientRequest::new(method, format!("{}{}", self.api_endpoint, path))
            .with_header("Authorization", format!("Bearer {}", self.access_token))
            .with_header("Accept", "application/json");
        if let Some(body) = body {
            request = request
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%method, url = %request.url, "Calling platform API");

        let response = self
            .api_client
            .invoke(request)
            .await
            .map_err(ServiceError::Transport)?;

        if !response.is_success() {
            return Err(ServiceError::Service {
                status: response.status,
                body: response.body,
            });
        }

        let body = response.body.trim();
        Ok(serde_json::from_str(if body.is_empty() { "null" } else { body })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubApiClient;

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let api = StubApiClient::responding(200, "[]");
        let client = BaseServiceClient::new(Arc::new(api.clone()), "https://api.example.test/", "t");

        let items: Vec<String> = client.call(HttpMethod::Get, "/v1/things").await.unwrap();

        assert!(items.is_empty());
        assert_eq!(api.requests()[0].url, "https://api.example.test/v1/things");
        assert_eq!(api.requests()[0].header("Accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_unit() {
        let api = StubApiClient::responding(204, "");
        let client = BaseServiceClient::new(Arc::new(api), "https://api.example.test", "t");

        let result: Result<(), ServiceError> = client.call(HttpMethod::Delete, "/v1/things/1").await;

        assert!(result.is_ok());
    }
}
