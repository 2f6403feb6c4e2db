//! End-to-end tests of `Skill::invoke` with request handlers.

use serde_json::json;
use skillkit::{
    ConfigurationError, DispatchError, HandlerChain, RequestEnvelope, Response, ResponseEnvelope,
    Skill, SkillError, USER_AGENT,
    testing::{CallLog, CountingHandler, RecordingInterceptor, ScriptedExceptionHandler, fixtures},
};

mod common;
use common::{
    ExplodingHandler, HelloHandler, SessionEndedHandler, StepReportingExceptionHandler,
    StopHandler,
};

fn speech(envelope: &ResponseEnvelope) -> Option<&str> {
    envelope.response.output_speech().map(|speech| speech.content())
}

fn hello_skill() -> Skill {
    Skill::builder()
        .add_request_handler(HelloHandler)
        .add_request_handler(StopHandler)
        .add_request_handler(SessionEndedHandler)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_invoke_returns_handler_response() {
    let skill = hello_skill();

    let envelope = skill
        .invoke(fixtures::intent_envelope("HelloIntent"))
        .await
        .unwrap();

    assert_eq!(envelope.version, "1.0");
    assert_eq!(speech(&envelope), Some("<speak>Hello!</speak>"));
    assert_eq!(envelope.user_agent.as_deref(), Some(USER_AGENT));
}

#[tokio::test]
async fn test_session_attributes_round_trip() {
    let skill = hello_skill();

    let mut request = fixtures::intent_envelope("HelloIntent");
    if let Some(session) = request.session.as_mut() {
        session.attributes.insert("turns".to_string(), json!(4));
        session.attributes.insert("name".to_string(), json!("Ada"));
    }

    let envelope = skill.invoke(request).await.unwrap();
    let attributes = envelope.session_attributes.unwrap();

    assert_eq!(attributes.get("turns"), Some(&json!(5)));
    assert_eq!(attributes.get("name"), Some(&json!("Ada")));
}

#[tokio::test]
async fn test_ending_response_drops_session_attributes() {
    let skill = hello_skill();

    let envelope = skill
        .invoke(fixtures::intent_envelope("StopIntent"))
        .await
        .unwrap();

    assert_eq!(envelope.response.should_end_session(), Some(true));
    assert!(envelope.session_attributes.is_none());
}

#[tokio::test]
async fn test_session_ended_returns_empty_response() {
    let skill = hello_skill();

    let envelope = skill
        .invoke(fixtures::session_ended_envelope())
        .await
        .unwrap();

    assert_eq!(envelope.response, Response::default());
    assert!(envelope.session_attributes.is_none());
}

#[tokio::test]
async fn test_no_matching_handler_yields_empty_response() {
    let skill = hello_skill();

    let envelope = skill
        .invoke(fixtures::intent_envelope("WeatherIntent"))
        .await
        .unwrap();

    assert_eq!(envelope.response, Response::default());
}

#[tokio::test]
async fn test_no_matching_handler_reaches_exception_handler() {
    let fallback = ScriptedExceptionHandler::returning(Response::tell("Sorry, I can't help."))
        .matching("suitable request handler");
    let skill = Skill::builder()
        .add_request_handler(HelloHandler)
        .add_exception_handler(fallback.clone())
        .build()
        .unwrap();

    let envelope = skill
        .invoke(fixtures::intent_envelope("WeatherIntent"))
        .await
        .unwrap();

    assert_eq!(fallback.count(), 1);
    assert_eq!(speech(&envelope), Some("<speak>Sorry, I can't help.</speak>"));
}

#[tokio::test]
async fn test_recovered_response_keeps_session_mutations() {
    let skill = Skill::builder()
        .add_request_handler(ExplodingHandler)
        .add_exception_handler(StepReportingExceptionHandler)
        .build()
        .unwrap();

    let envelope = skill
        .invoke(fixtures::intent_envelope("ExplodeIntent"))
        .await
        .unwrap();

    assert_eq!(speech(&envelope), Some("<speak>Recovered at before failure.</speak>"));
    assert_eq!(
        envelope.session_attributes.unwrap().get("step"),
        Some(&json!("before failure"))
    );
}

#[tokio::test]
async fn test_unhandled_error_reaches_host() {
    let skill = Skill::builder()
        .add_request_handler(ExplodingHandler)
        .build()
        .unwrap();

    let result = skill
        .invoke(fixtures::intent_envelope("ExplodeIntent"))
        .await;

    match result {
        Err(SkillError::Dispatch(error @ DispatchError::Unhandled(_))) => {
            assert_eq!(error.cause().unwrap().to_string(), "handler exploded");
        }
        other => panic!("expected an unhandled dispatch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failing_exception_handler_reaches_host() {
    let skill = Skill::builder()
        .add_request_handler(ExplodingHandler)
        .add_exception_handler(ScriptedExceptionHandler::<Response>::failing("still broken"))
        .build()
        .unwrap();

    let result = skill
        .invoke(fixtures::intent_envelope("ExplodeIntent"))
        .await;

    assert!(matches!(
        result,
        Err(SkillError::Dispatch(DispatchError::ExceptionHandler(_)))
    ));
}

#[tokio::test]
async fn test_global_and_chain_interceptor_order() {
    let log = CallLog::new();
    let chain = HandlerChain::for_request_handler(HelloHandler)
        .add_request_interceptor(RecordingInterceptor::new("chain request", log.clone()))
        .add_response_interceptor(RecordingInterceptor::new("chain response", log.clone()))
        .build();
    let skill = Skill::builder()
        .add_handler_chain(chain)
        .add_request_interceptor(RecordingInterceptor::new("global request", log.clone()))
        .add_response_interceptor(RecordingInterceptor::new("global response", log.clone()))
        .build()
        .unwrap();

    skill
        .invoke(fixtures::intent_envelope("HelloIntent"))
        .await
        .unwrap();

    assert_eq!(
        log.entries(),
        vec![
            "global request",
            "chain request",
            "chain response",
            "global response"
        ]
    );
}

#[tokio::test]
async fn test_handlers_are_tried_in_registration_order() {
    let first = CountingHandler::returning(Response::tell("first"));
    let second = CountingHandler::returning(Response::tell("second"));
    let skill = Skill::builder()
        .add_request_handler(CountingHandler::<Response>::rejecting())
        .add_request_handler(first.clone())
        .add_request_handler(second.clone())
        .build()
        .unwrap();

    let envelope = skill.invoke(fixtures::launch_envelope()).await.unwrap();

    assert_eq!(speech(&envelope), Some("<speak>first</speak>"));
    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 0);
}

#[test]
fn test_custom_user_agent_is_appended() {
    let skill = Skill::builder()
        .add_request_handler(HelloHandler)
        .with_custom_user_agent("my-skill/2.1")
        .build()
        .unwrap();

    assert_eq!(skill.user_agent(), format!("{USER_AGENT} my-skill/2.1"));
}

#[tokio::test]
async fn test_invoke_json() {
    let skill = hello_skill();
    let request = fixtures::intent_envelope("HelloIntent").to_vec().unwrap();

    let body = skill.invoke_json(&request).await.unwrap();
    let envelope = ResponseEnvelope::from_slice(&body).unwrap();

    assert_eq!(speech(&envelope), Some("<speak>Hello!</speak>"));
    assert_eq!(
        envelope.session_attributes.unwrap().get("turns"),
        Some(&json!(1))
    );
}

#[tokio::test]
async fn test_invoke_json_rejects_malformed_body() {
    let skill = hello_skill();

    let result = skill.invoke_json(b"{\"version\": ").await;

    assert!(matches!(result, Err(SkillError::Json(_))));
}

#[tokio::test]
async fn test_invoke_json_accepts_platform_document() {
    let skill = hello_skill();
    let request = json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "session-42",
            "attributes": { "turns": 1 },
            "user": { "userId": "user-42" }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "request-42",
            "timestamp": "2026-03-01T12:00:00Z",
            "locale": "en-GB",
            "intent": { "name": "HelloIntent" }
        }
    });

    let body = skill
        .invoke_json(&serde_json::to_vec(&request).unwrap())
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(response["version"], "1.0");
    assert_eq!(response["sessionAttributes"]["turns"], 2);
    assert_eq!(response["response"]["outputSpeech"]["type"], "SSML");
    assert_eq!(
        response["response"]["outputSpeech"]["ssml"],
        "<speak>Hello!</speak>"
    );
}

#[test]
fn test_build_requires_a_handler() {
    let result = Skill::builder().build();

    assert!(matches!(
        result,
        Err(ConfigurationError::MissingRequestHandler)
    ));
}

#[tokio::test]
async fn test_envelope_without_session_has_no_attributes() {
    let skill = Skill::builder()
        .add_request_handler(CountingHandler::returning(Response::default()))
        .build()
        .unwrap();

    let envelope: RequestEnvelope = fixtures::audio_player_envelope();
    let response = skill.invoke(envelope).await.unwrap();

    assert!(response.session_attributes.is_none());
}
