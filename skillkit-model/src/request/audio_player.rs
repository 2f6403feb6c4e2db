use crate::context::PlayerActivity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload shared by the started/finished/stopped/nearly-finished
/// `AudioPlayer` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Token of the stream the event refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Playback offset when the event fired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_in_milliseconds: Option<i64>,
}

/// `AudioPlayer.PlaybackFailed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackFailedRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Token of the stream that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// What went wrong.
    pub error: PlaybackError,
    /// What was playing when the failure happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_playback_state: Option<CurrentPlaybackState>,
}

/// Error reported by `AudioPlayer.PlaybackFailed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackError {
    /// Error category.
    #[serde(rename = "type")]
    pub kind: PlaybackErrorType,
    /// Human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Category of a [`PlaybackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaybackErrorType {
    /// Unknown failure.
    MediaErrorUnknown,
    /// The stream request was invalid.
    MediaErrorInvalidRequest,
    /// The stream could not be reached.
    MediaErrorServiceUnavailable,
    /// The stream server failed.
    MediaErrorInternalServerError,
    /// The device failed.
    MediaErrorInternalDeviceError,
}

/// Player state attached to a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPlaybackState {
    /// Token of the current stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Current offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_in_milliseconds: Option<i64>,
    /// Current activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_activity: Option<PlayerActivity>,
}

/// Payload shared by the `PlaybackController` button events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackControllerRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}
