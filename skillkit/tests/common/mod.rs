#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use skillkit::{
    BoxError, DynError, ExceptionHandler, HandlerInput, IntentRequest, RequestHandler, RequestType,
    Response, Speechlet,
    model::{
        LaunchRequest, SessionEndedRequest, SessionStartedRequest,
        request::{
            AudioPlayerRequest, ExceptionEncounteredRequest, PlaybackControllerRequest,
            PlaybackFailedRequest,
        },
    },
    predicates::{intent_name, request_type},
    testing::CallLog,
};

// ============================================================================
// Request Handlers
// ============================================================================

/// Answers `HelloIntent` and counts turns in the session attributes.
pub struct HelloHandler;

impl RequestHandler<HandlerInput, Response> for HelloHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.matches(intent_name("HelloIntent"))
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
        let session = input.attributes_manager_mut().session_attributes_mut()?;
        let turns = session.get("turns").and_then(|v| v.as_u64()).unwrap_or(0);
        session.insert("turns".to_string(), json!(turns + 1));

        Ok(Some(
            input
                .response_builder()
                .speak("Hello!")
                .reprompt("Say hello again.")
                .build(),
        ))
    }
}

/// Answers `StopIntent` with a response that ends the session.
pub struct StopHandler;

impl RequestHandler<HandlerInput, Response> for StopHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.matches(intent_name("StopIntent"))
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
        input
            .attributes_manager_mut()
            .session_attributes_mut()?
            .insert("stopped".to_string(), json!(true));
        Ok(Some(Response::tell("Goodbye.")))
    }
}

/// Claims session-ended requests and returns nothing.
pub struct SessionEndedHandler;

impl RequestHandler<HandlerInput, Response> for SessionEndedHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.matches(request_type(RequestType::SessionEnded))
    }

    async fn handle(&self, _input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
        Ok(None)
    }
}

/// Writes a session attribute, then fails with "handler exploded".
pub struct ExplodingHandler;

impl RequestHandler<HandlerInput, Response> for ExplodingHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.matches(intent_name("ExplodeIntent"))
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
        input
            .attributes_manager_mut()
            .session_attributes_mut()?
            .insert("step".to_string(), json!("before failure"));
        Err("handler exploded".into())
    }
}

/// Counts visits in persistent attributes and saves them.
pub struct VisitCounter;

impl RequestHandler<HandlerInput, Response> for VisitCounter {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.matches(request_type(RequestType::Launch))
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
        let manager = input.attributes_manager_mut();
        let persistent = manager.persistent_attributes_mut().await?;
        let visits = persistent.get("visits").and_then(|v| v.as_u64()).unwrap_or(0) + 1;
        persistent.insert("visits".to_string(), json!(visits));
        manager.save_persistent_attributes().await?;

        Ok(Some(Response::ask(format!("Visit {visits}."), "Still there?")))
    }
}

/// Looks up the device's country and speaks it.
pub struct CountryHandler;

impl RequestHandler<HandlerInput, Response> for CountryHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.matches(intent_name("CountryIntent"))
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
        let factory = input
            .service_client_factory()
            .ok_or("no service client factory")?;
        let device_id = input
            .context()
            .and_then(|context| context.system.device.as_ref())
            .map(|device| device.device_id.clone())
            .ok_or("no device")?;

        let address = factory
            .device_address_service()?
            .country_and_postal_code(&device_id)
            .await?;
        let country = address.country_code.unwrap_or_default();

        Ok(Some(Response::tell(format!("You are in {country}."))))
    }
}

// ============================================================================
// Exception Handlers
// ============================================================================

/// Recovers from any error, speaking the value of the `step` session
/// attribute it finds.
pub struct StepReportingExceptionHandler;

impl ExceptionHandler<HandlerInput, Response> for StepReportingExceptionHandler {
    fn can_handle(&self, _input: &HandlerInput, _error: &DynError) -> bool {
        true
    }

    async fn handle(
        &self,
        input: &mut HandlerInput,
        _error: &DynError,
    ) -> Result<Option<Response>, BoxError> {
        let step = input
            .attributes_manager()
            .session_attributes()?
            .get("step")
            .and_then(|v| v.as_str())
            .unwrap_or("none")
            .to_string();
        Ok(Some(Response::ask(format!("Recovered at {step}."), "Try again?")))
    }
}

// ============================================================================
// Speechlet
// ============================================================================

/// Records every callback it receives.
pub struct RecordingSpeechlet {
    pub log: CallLog,
}

#[async_trait]
impl Speechlet for RecordingSpeechlet {
    async fn on_session_started(
        &self,
        request: &SessionStartedRequest,
        _input: &mut HandlerInput,
    ) -> Result<(), BoxError> {
        self.log.record(format!("session_started:{}", request.request_id));
        Ok(())
    }

    async fn on_launch(
        &self,
        _request: &LaunchRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.log.record("launch");
        Ok(Some(Response::ask("Welcome.", "What now?")))
    }

    async fn on_intent(
        &self,
        request: &IntentRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.log.record(format!("intent:{}", request.intent.name));
        Ok(Some(Response::tell("Done.")))
    }

    async fn on_session_ended(
        &self,
        _request: &SessionEndedRequest,
        _input: &mut HandlerInput,
    ) -> Result<(), BoxError> {
        self.log.record("session_ended");
        Ok(())
    }
}

/// Overrides every callback and records the method name it reached.
pub struct TracingSpeechlet {
    pub log: CallLog,
}

impl TracingSpeechlet {
    fn reached(&self, method: &str) -> Result<Option<Response>, BoxError> {
        self.log.record(method);
        Ok(Some(Response::tell(method)))
    }
}

#[async_trait]
impl Speechlet for TracingSpeechlet {
    async fn on_session_started(
        &self,
        _request: &SessionStartedRequest,
        _input: &mut HandlerInput,
    ) -> Result<(), BoxError> {
        self.log.record("on_session_started");
        Ok(())
    }

    async fn on_launch(
        &self,
        _request: &LaunchRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_launch")
    }

    async fn on_intent(
        &self,
        _request: &IntentRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_intent")
    }

    async fn on_session_ended(
        &self,
        _request: &SessionEndedRequest,
        _input: &mut HandlerInput,
    ) -> Result<(), BoxError> {
        self.log.record("on_session_ended");
        Ok(())
    }

    async fn on_playback_started(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_playback_started")
    }

    async fn on_playback_finished(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_playback_finished")
    }

    async fn on_playback_stopped(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_playback_stopped")
    }

    async fn on_playback_nearly_finished(
        &self,
        _request: &AudioPlayerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_playback_nearly_finished")
    }

    async fn on_playback_failed(
        &self,
        _request: &PlaybackFailedRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_playback_failed")
    }

    async fn on_play_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_play_command")
    }

    async fn on_pause_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_pause_command")
    }

    async fn on_next_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_next_command")
    }

    async fn on_previous_command(
        &self,
        _request: &PlaybackControllerRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_previous_command")
    }

    async fn on_exception_encountered(
        &self,
        _request: &ExceptionEncounteredRequest,
        _input: &mut HandlerInput,
    ) -> Result<Option<Response>, BoxError> {
        self.reached("on_exception_encountered")
    }
}
