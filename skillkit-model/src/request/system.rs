use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `System.ExceptionEncountered`: the platform could not act on a previous
/// response. The skill may not return speech or cards for this request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionEncounteredRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// What went wrong.
    pub error: SystemError,
    /// The request whose response caused the error.
    pub cause: ExceptionCause,
}

/// Error reported by `System.ExceptionEncountered`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemError {
    /// Error category.
    #[serde(rename = "type")]
    pub kind: SystemErrorType,
    /// Human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Category of a [`SystemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemErrorType {
    /// The directive was malformed or not supported.
    InvalidResponse,
    /// The device could not be reached.
    DeviceCommunicationError,
    /// The platform failed.
    InternalServiceError,
}

/// Identifies the request whose response triggered the exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionCause {
    /// Id of the offending request.
    pub request_id: String,
}
