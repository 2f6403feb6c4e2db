//! # Speechlet
//!
//! A callback interface with one method per request kind, as an alternative
//! to `can_handle`/`handle` request handlers.
//!
//! A speechlet is registered with
//! [`SkillBuilder::with_speechlet`](crate::SkillBuilder::with_speechlet) and
//! receives every request that no earlier handler chain claimed. On the first
//! request of a session, [`on_session_started`](Speechlet::on_session_started)
//! runs before the request's own method.
//!
//! Only launch, intent and session lifecycle methods are required. The
//! audio-player, playback-controller and system methods default to
//! [`SpeechletError::UnsupportedRequest`], which goes through exception
//! handling like any other error.

mod adapter;

pub use adapter::{SpeechletHandler, SpeechletHandlerAdapter};

use crate::input::HandlerInput;
use async_trait::async_trait;
use skillkit_core::BoxError;
use skillkit_model::{
    IntentRequest, LaunchRequest, RequestType, Response, SessionEndedRequest,
    SessionStartedRequest,
    request::{
        AudioPlayerRequest, ExceptionEncounteredRequest, PlaybackControllerRequest,
        PlaybackFailedRequest,
    },
};
use thiserror::Error;

/// Errors raised by the speechlet adapter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechletError {
    /// The speechlet does not handle this kind of request.
    #[error("speechlet does not support {0} requests")]
    UnsupportedRequest(RequestType),
}

fn unsupported(kind: RequestType) -> BoxError {
    Box::new(SpeechletError::UnsupportedRequest(kind))
}

/// Per-request-kind callbacks.
#[async_trait]
pub trait Speechlet: Send + Sync + 'static {
    /// Called once at the start of a session, before the request's own method.
    async fn on_session_started(
        &self,
        _request: &SessionStartedRequest,
        _input: &mut HandlerInput,
    ) -> Result<(), BoxError> {
        Ok(())
    }

    /// The user opened the skill without an intent.
    async fn on_launch(
        &self,
        request: &LaunchRequest,
        input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError>;

    /// The user spoke an intent.
    async fn on_intent(
        &self,
        request: &IntentRequest,
        input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError>;

    /// The session ended. The platform ignores any response, so none is taken.
    async fn on_session_ended(
        &self,
        _request: &SessionEndedRequest,
        _input: &mut HandlerInput,
    ) -> Result<(), BoxError> {
        Ok(())
    }

    /// Playback of a stream began.
    async fn on_playback_started(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PlaybackStarted))
    }

    /// Playback of a stream completed.
    async fn on_playback_finished(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PlaybackFinished))
    }

    /// Playback stopped on user or device action.
    async fn on_playback_stopped(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PlaybackStopped))
    }

    /// The current stream is about to finish; enqueue the next one here.
    async fn on_playback_nearly_finished(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PlaybackNearlyFinished))
    }

    /// The device could not play a stream.
    async fn on_playback_failed(
        &self,
        _request: &PlaybackFailedRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PlaybackFailed))
    }

    /// A hardware or on-screen play button was pressed.
    async fn on_play_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PlayCommandIssued))
    }

    /// A pause button was pressed.
    async fn on_pause_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PauseCommandIssued))
    }

    /// A next button was pressed.
    async fn on_next_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::NextCommandIssued))
    }

    /// A previous button was pressed.
    async fn on_previous_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::PreviousCommandIssued))
    }

    /// The platform reports that an earlier response of this skill failed.
    async fn on_exception_encountered(
        &self,
        _request: &ExceptionEncounteredRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        Err(unsupported(RequestType::ExceptionEncountered))
    }
}
