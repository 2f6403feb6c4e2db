//! Progressive responses through the directive service.

use super::{
    base::{BaseServiceClient, ServiceError},
    client::HttpMethod,
};
use serde::{Deserialize, Serialize};

/// Request body for [`DirectiveServiceClient::enqueue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendDirectiveRequest {
    /// Ties the directive to the request being handled.
    pub header: DirectiveHeader,
    /// The directive to play.
    pub directive: ProgressiveDirective,
}

impl SendDirectiveRequest {
    /// Speak `speech` while the skill is still working on request `request_id`.
    pub fn speak(request_id: impl Into<String>, speech: impl Into<String>) -> Self {
        Self {
            header: DirectiveHeader {
                request_id: request_id.into(),
            },
            directive: ProgressiveDirective::Speak {
                speech: speech.into(),
            },
        }
    }
}

/// Header of a [`SendDirectiveRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveHeader {
    /// Id of the request being handled.
    pub request_id: String,
}

/// Directives accepted by the directive service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProgressiveDirective {
    /// Speak interim output.
    #[serde(rename = "VoicePlayer.Speak")]
    Speak {
        /// Plain text or SSML.
        speech: String,
    },
}

/// Client for `/v1/directives`.
#[derive(Clone)]
pub struct DirectiveServiceClient {
    base: BaseServiceClient,
}

impl DirectiveServiceClient {
    /// Create a client on top of `base`.
    pub fn new(base: BaseServiceClient) -> Self {
        Self { base }
    }

    /// Sends a directive to the device ahead of the final response.
    pub async fn enqueue(&self, request: &SendDirectiveRequest) -> Result<(), ServiceError> {
        self.base
            .call_with_body(HttpMethod::Post, "/v1/directives", request)
            .await
    }
}
