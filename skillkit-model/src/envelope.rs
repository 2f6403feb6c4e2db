//! Top-level request and response documents.

use crate::{
    context::Context,
    request::Request,
    response::Response,
    session::{Attributes, Session},
};
use serde::{Deserialize, Serialize};

/// Protocol version written on every response envelope.
pub const PROTOCOL_VERSION: &str = "1.0";

/// The document the platform sends to the skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Protocol version.
    pub version: String,
    /// Conversation state; absent for out-of-session requests such as
    /// `AudioPlayer` events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    /// Device state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    /// The request.
    pub request: Request,
}

impl RequestEnvelope {
    /// Wraps a request with no session or context.
    pub fn new(request: Request) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            session: None,
            context: None,
            request,
        }
    }

    /// Attaches a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Attaches a context.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Parses an envelope from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serializes the envelope to JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// The document the skill sends back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Protocol version.
    pub version: String,
    /// Attributes the platform should hand back on the next request of the
    /// session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Attributes>,
    /// SDK identification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// The response body.
    pub response: Response,
}

impl ResponseEnvelope {
    /// Wraps a response body.
    pub fn new(response: Response) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            session_attributes: None,
            user_agent: None,
            response,
        }
    }

    /// Parses an envelope from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serializes the envelope to JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
