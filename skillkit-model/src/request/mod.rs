//! Request kinds.
//!
//! [`Request`] is a sum type over every request the platform sends, tagged by
//! the JSON `type` field. Request kinds this crate does not know deserialize
//! to [`Request::Unknown`] so that the envelope still parses; whether such a
//! request can be handled is decided by the dispatch layer.

mod audio_player;
mod intent;
mod system;

pub use audio_player::{
    AudioPlayerRequest, CurrentPlaybackState, PlaybackControllerRequest, PlaybackError,
    PlaybackErrorType, PlaybackFailedRequest,
};
pub use intent::{ConfirmationStatus, DialogState, Intent, IntentRequest, Slot};
pub use system::{
    ExceptionCause, ExceptionEncounteredRequest, SystemError, SystemErrorType,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An incoming request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// The user opened the skill without a specific intent.
    LaunchRequest(LaunchRequest),
    /// The user spoke an utterance mapped to an intent.
    IntentRequest(IntentRequest),
    /// A new session started.
    SessionStartedRequest(SessionStartedRequest),
    /// The session ended.
    SessionEndedRequest(SessionEndedRequest),
    /// A stream started playing.
    #[serde(rename = "AudioPlayer.PlaybackStarted")]
    PlaybackStarted(AudioPlayerRequest),
    /// A stream played to completion.
    #[serde(rename = "AudioPlayer.PlaybackFinished")]
    PlaybackFinished(AudioPlayerRequest),
    /// A stream was stopped.
    #[serde(rename = "AudioPlayer.PlaybackStopped")]
    PlaybackStopped(AudioPlayerRequest),
    /// A stream is about to finish; the next one can be enqueued.
    #[serde(rename = "AudioPlayer.PlaybackNearlyFinished")]
    PlaybackNearlyFinished(AudioPlayerRequest),
    /// A stream failed to play.
    #[serde(rename = "AudioPlayer.PlaybackFailed")]
    PlaybackFailed(PlaybackFailedRequest),
    /// The user pressed "play" on the device.
    #[serde(rename = "PlaybackController.PlayCommandIssued")]
    PlayCommandIssued(PlaybackControllerRequest),
    /// The user pressed "pause" on the device.
    #[serde(rename = "PlaybackController.PauseCommandIssued")]
    PauseCommandIssued(PlaybackControllerRequest),
    /// The user pressed "next" on the device.
    #[serde(rename = "PlaybackController.NextCommandIssued")]
    NextCommandIssued(PlaybackControllerRequest),
    /// The user pressed "previous" on the device.
    #[serde(rename = "PlaybackController.PreviousCommandIssued")]
    PreviousCommandIssued(PlaybackControllerRequest),
    /// The platform rejected an earlier response.
    #[serde(rename = "System.ExceptionEncountered")]
    ExceptionEncountered(ExceptionEncounteredRequest),
    /// A request kind this crate does not model.
    #[serde(other)]
    Unknown,
}

impl Request {
    /// Returns the kind of this request.
    pub fn request_type(&self) -> RequestType {
        match self {
            Self::LaunchRequest(_) => RequestType::Launch,
            Self::IntentRequest(_) => RequestType::Intent,
            Self::SessionStartedRequest(_) => RequestType::SessionStarted,
            Self::SessionEndedRequest(_) => RequestType::SessionEnded,
            Self::PlaybackStarted(_) => RequestType::PlaybackStarted,
            Self::PlaybackFinished(_) => RequestType::PlaybackFinished,
            Self::PlaybackStopped(_) => RequestType::PlaybackStopped,
            Self::PlaybackNearlyFinished(_) => RequestType::PlaybackNearlyFinished,
            Self::PlaybackFailed(_) => RequestType::PlaybackFailed,
            Self::PlayCommandIssued(_) => RequestType::PlayCommandIssued,
            Self::PauseCommandIssued(_) => RequestType::PauseCommandIssued,
            Self::NextCommandIssued(_) => RequestType::NextCommandIssued,
            Self::PreviousCommandIssued(_) => RequestType::PreviousCommandIssued,
            Self::ExceptionEncountered(_) => RequestType::ExceptionEncountered,
            Self::Unknown => RequestType::Unknown,
        }
    }

    fn meta(&self) -> Option<(&str, DateTime<Utc>, Option<&str>)> {
        let fields = match self {
            Self::LaunchRequest(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::IntentRequest(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::SessionStartedRequest(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::SessionEndedRequest(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::PlaybackStarted(r)
            | Self::PlaybackFinished(r)
            | Self::PlaybackStopped(r)
            | Self::PlaybackNearlyFinished(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::PlaybackFailed(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::PlayCommandIssued(r)
            | Self::PauseCommandIssued(r)
            | Self::NextCommandIssued(r)
            | Self::PreviousCommandIssued(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::ExceptionEncountered(r) => (&r.request_id, r.timestamp, &r.locale),
            Self::Unknown => return None,
        };
        Some((fields.0.as_str(), fields.1, fields.2.as_deref()))
    }

    /// Platform-assigned request id. `None` only for [`Request::Unknown`].
    pub fn request_id(&self) -> Option<&str> {
        self.meta().map(|(id, _, _)| id)
    }

    /// When the request was issued.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.meta().map(|(_, ts, _)| ts)
    }

    /// The user's locale, e.g. `en-US`.
    pub fn locale(&self) -> Option<&str> {
        self.meta().and_then(|(_, _, locale)| locale)
    }

    /// Returns the intent request, if this is one.
    pub fn as_intent_request(&self) -> Option<&IntentRequest> {
        match self {
            Self::IntentRequest(r) => Some(r),
            _ => None,
        }
    }
}

/// The kind of a [`Request`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// `LaunchRequest`
    Launch,
    /// `IntentRequest`
    Intent,
    /// `SessionStartedRequest`
    SessionStarted,
    /// `SessionEndedRequest`
    SessionEnded,
    /// `AudioPlayer.PlaybackStarted`
    PlaybackStarted,
    /// `AudioPlayer.PlaybackFinished`
    PlaybackFinished,
    /// `AudioPlayer.PlaybackStopped`
    PlaybackStopped,
    /// `AudioPlayer.PlaybackNearlyFinished`
    PlaybackNearlyFinished,
    /// `AudioPlayer.PlaybackFailed`
    PlaybackFailed,
    /// `PlaybackController.PlayCommandIssued`
    PlayCommandIssued,
    /// `PlaybackController.PauseCommandIssued`
    PauseCommandIssued,
    /// `PlaybackController.NextCommandIssued`
    NextCommandIssued,
    /// `PlaybackController.PreviousCommandIssued`
    PreviousCommandIssued,
    /// `System.ExceptionEncountered`
    ExceptionEncountered,
    /// Any other `type`.
    Unknown,
}

impl RequestType {
    /// The JSON `type` value for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::Intent => "IntentRequest",
            Self::SessionStarted => "SessionStartedRequest",
            Self::SessionEnded => "SessionEndedRequest",
            Self::PlaybackStarted => "AudioPlayer.PlaybackStarted",
            Self::PlaybackFinished => "AudioPlayer.PlaybackFinished",
            Self::PlaybackStopped => "AudioPlayer.PlaybackStopped",
            Self::PlaybackNearlyFinished => "AudioPlayer.PlaybackNearlyFinished",
            Self::PlaybackFailed => "AudioPlayer.PlaybackFailed",
            Self::PlayCommandIssued => "PlaybackController.PlayCommandIssued",
            Self::PauseCommandIssued => "PlaybackController.PauseCommandIssued",
            Self::NextCommandIssued => "PlaybackController.NextCommandIssued",
            Self::PreviousCommandIssued => "PlaybackController.PreviousCommandIssued",
            Self::ExceptionEncountered => "System.ExceptionEncountered",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user opened the skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// A session started.
///
/// The platform signals a new session through `session.new`; the speechlet
/// dispatcher synthesizes this request from the envelope's current request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartedRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// The session ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    /// Request id.
    pub request_id: String,
    /// Issue time.
    pub timestamp: DateTime<Utc>,
    /// User locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Why the session ended.
    pub reason: SessionEndedReason,
    /// Error details when `reason` is [`SessionEndedReason::Error`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SessionEndedError>,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEndedReason {
    /// The user asked to stop.
    UserInitiated,
    /// Something went wrong.
    Error,
    /// The user did not answer the reprompts.
    ExceededMaxReprompts,
}

/// Error attached to a [`SessionEndedRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEndedError {
    /// Error category.
    #[serde(rename = "type")]
    pub kind: SessionEndedErrorType,
    /// Human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Category of a [`SessionEndedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEndedErrorType {
    /// The skill's response was malformed.
    InvalidResponse,
    /// The device could not be reached.
    DeviceCommunicationError,
    /// Platform-side failure.
    InternalError,
}
