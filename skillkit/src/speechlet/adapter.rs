//! Routing of requests to speechlet callbacks.

use super::{Speechlet, unsupported};
use crate::input::HandlerInput;
use skillkit_core::{BoxError, BoxFuture, ErasedHandler, HandlerAdapter};
use skillkit_model::{Request, RequestType, Response, SessionStartedRequest};
use std::sync::Arc;

/// A speechlet as stored in a handler chain.
#[derive(Clone)]
pub struct SpeechletHandler {
    speechlet: Arc<dyn Speechlet>,
}

impl SpeechletHandler {
    /// Wraps a speechlet.
    pub fn new<S: Speechlet>(speechlet: S) -> Self {
        Self {
            speechlet: Arc::new(speechlet),
        }
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
        let request = input.request().clone();
        let speechlet = self.speechlet.as_ref();

        let opens_session = input.session().is_some_and(|session| session.new)
            && !matches!(request, Request::SessionStartedRequest(_));
        if let Some(started) = session_started(&request).filter(|_| opens_session) {
            speechlet.on_session_started(&started, input).await?;
        }

        match &request {
            Request::LaunchRequest(r) => speechlet.on_launch(r, input).await,
            Request::IntentRequest(r) => speechlet.on_intent(r, input).await,
            Request::SessionStartedRequest(r) => {
                speechlet.on_session_started(r, input).await?;
                Ok(None)
            }
            Request::SessionEndedRequest(r) => {
                speechlet.on_session_ended(r, input).await?;
                Ok(None)
            }
            Request::PlaybackStarted(r) => speechlet.on_playback_started(r, input).await,
            Request::PlaybackFinished(r) => speechlet.on_playback_finished(r, input).await,
            Request::PlaybackStopped(r) => speechlet.on_playback_stopped(r, input).await,
            Request::PlaybackNearlyFinished(r) => {
                speechlet.on_playback_nearly_finished(r, input).await
            }
            Request::PlaybackFailed(r) => speechlet.on_playback_failed(r, input).await,
            Request::PlayCommandIssued(r) => speechlet.on_play_command(r, input).await,
            Request::PauseCommandIssued(r) => speechlet.on_pause_command(r, input).await,
            Request::NextCommandIssued(r) => speechlet.on_next_command(r, input).await,
            Request::PreviousCommandIssued(r) => speechlet.on_previous_command(r, input).await,
            Request::ExceptionEncountered(r) => speechlet.on_exception_encountered(r, input).await,
            Request::Unknown => Err(unsupported(RequestType::Unknown)),
        }
    }
}

/// The session-start notice for the first request of a session.
fn session_started(request: &Request) -> Option<SessionStartedRequest> {
    Some(SessionStartedRequest {
        request_id: request.request_id()?.to_string(),
        timestamp: request.timestamp()?,
        locale: request.locale().map(str::to_string),
    })
}

/// Executes chains whose handler is a [`SpeechletHandler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeechletHandlerAdapter;

impl HandlerAdapter<HandlerInput, Response> for SpeechletHandlerAdapter {
    fn supports(&self, handler: &ErasedHandler) -> bool {
        handler.is::<SpeechletHandler>()
    }

    fn execute<'a>(
        &'a self,
        input: &'a mut HandlerInput,
        handler: &'a ErasedHandler,
    ) -> BoxFuture<'a, Result<Option<Response>, BoxError>> {
        Box::pin(async move {
            match handler.downcast_ref::<SpeechletHandler>() {
                Some(speechlet) => speechlet.handle(input).await,
                None => Err(unsupported(input.request_type())),
            }
        })
    }
}
