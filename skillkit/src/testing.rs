//! Testing utilities for skills.
//!
//! - [`InMemoryPersistenceAdapter`]: A persistence adapter backed by a map
//! - [`StubApiClient`]: An API client that records requests and returns a scripted response
//! - [`fixtures`]: Ready-made request envelopes
//!
//! The generic helpers from `skillkit-std` are re-exported here as well.

pub use skillkit_std::testing::{
    CallLog, CountingHandler, RecordingInterceptor, ScriptedExceptionHandler,
};

use crate::{
    attributes::PersistenceAdapter,
    service::{ApiClient, ApiClientRequest, ApiClientResponse},
};
use async_trait::async_trait;
use serde_json::Value;
use skillkit_core::BoxError;
use skillkit_model::Attributes;
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// In-Memory Persistence
// ============================================================================

/// A persistence adapter that keeps attributes in memory.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistenceAdapter {
    store: Arc<Mutex<HashMap<String, Attributes>>>,
    gets: Arc<AtomicUsize>,
}

impl InMemoryPersistenceAdapter {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a JSON object. Non-object values are ignored.
    pub fn insert(&self, key: impl Into<String>, attributes: Value) {
        if let Value::Object(map) = attributes {
            lock(&self.store).insert(key.into(), map);
        }
    }

    /// What is stored under `key`, as a JSON object.
    pub fn stored(&self, key: &str) -> Option<Value> {
        lock(&self.store).get(key).cloned().map(Value::Object)
    }

    /// Number of `get_attributes` calls so far.
    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersistenceAdapter for InMemoryPersistenceAdapter {
    async fn get_attributes(&self, key: &str) -> Result<Option<Attributes>, BoxError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Ok(lock(&self.store).get(key).cloned())
    }

    async fn save_attributes(&self, key: &str, attributes: &Attributes) -> Result<(), BoxError> {
        lock(&self.store).insert(key.to_string(), attributes.clone());
        Ok(())
    }

    async fn delete_attributes(&self, key: &str) -> Result<(), BoxError> {
        lock(&self.store).remove(key);
        Ok(())
    }
}

// ============================================================================
// Stub API Client
// ============================================================================

/// An API client that records every request and answers with a fixed
/// response.
///
/// # Example
///
/// ```rust,ignore
/// let api = StubApiClient::responding(200, r#"{"countryCode":"US"}"#);
/// let skill = Skill::builder()
///     .with_api_client(api.clone())
///     // ...
///     .build()?;
///
/// skill.invoke(envelope).await?;
/// assert_eq!(api.requests()[0].header("Authorization"), Some("Bearer test-token"));
/// ```
#[derive(Debug, Clone)]
pub struct StubApiClient {
    requests: Arc<Mutex<Vec<ApiClientRequest>>>,
    response: ApiClientResponse,
}

impl StubApiClient {
    /// Answer every request with `status` and `body`.
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: ApiClientResponse {
                status,
                body: body.into(),
            },
        }
    }

    /// Get a copy of the recorded requests.
    pub fn requests(&self) -> Vec<ApiClientRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl ApiClient for StubApiClient {
    async fn invoke(&self, request: ApiClientRequest) -> Result<ApiClientResponse, BoxError> {
        lock(&self.requests).push(request);
        Ok(self.response.clone())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Request envelopes for tests.
///
/// Every envelope carries a context naming [`USER_ID`](fixtures::USER_ID), an
/// API endpoint and an access token. In-session envelopes use
/// [`session`](fixtures::session) unless noted.
pub mod fixtures {
    use crate::{
        attributes::{AttributesManager, PartitionKeyStrategy},
        input::HandlerInput,
    };
    use chrono::Utc;
    use skillkit_model::{
        Application, Context, Device, Intent, IntentRequest, LaunchRequest, Request,
        RequestEnvelope, Session, SessionEndedReason, SessionEndedRequest, SystemState, User,
        request::AudioPlayerRequest,
    };

    /// User id used throughout the fixtures.
    pub const USER_ID: &str = "user-0001";
    /// Device id of [`device_context`].
    pub const DEVICE_ID: &str = "device-0001";
    /// Application id used throughout the fixtures.
    pub const APPLICATION_ID: &str = "skill-0001";
    /// Session id of [`session`].
    pub const SESSION_ID: &str = "session-0001";
    /// API endpoint of [`context`].
    pub const API_ENDPOINT: &str = "https://api.example.test";
    /// API access token of [`context`].
    pub const API_ACCESS_TOKEN: &str = "test-token";
    /// Request id of every fixture request.
    pub const REQUEST_ID: &str = "request-0001";

    /// An ongoing session.
    pub fn session() -> Session {
        Session {
            application: Some(Application {
                application_id: APPLICATION_ID.to_string(),
            }),
            ..Session::new(SESSION_ID).with_user(User::new(USER_ID))
        }
    }

    /// A context without a device.
    pub fn context() -> Context {
        Context {
            system: SystemState {
                application: Some(Application {
                    application_id: APPLICATION_ID.to_string(),
                }),
                user: Some(User::new(USER_ID)),
                device: None,
                api_endpoint: Some(API_ENDPOINT.to_string()),
                api_access_token: Some(API_ACCESS_TOKEN.to_string()),
            },
            audio_player: None,
        }
    }

    /// A context naming [`DEVICE_ID`].
    pub fn device_context() -> Context {
        let mut context = context();
        context.system.device = Some(Device {
            device_id: DEVICE_ID.to_string(),
            ..Device::default()
        });
        context
    }

    fn envelope(request: Request) -> RequestEnvelope {
        RequestEnvelope::new(request).with_context(context())
    }

    /// A launch request opening a new session.
    pub fn launch_envelope() -> RequestEnvelope {
        envelope(Request::LaunchRequest(LaunchRequest {
            request_id: REQUEST_ID.to_string(),
            timestamp: Utc::now(),
            locale: Some("en-US".to_string()),
        }))
        .with_session(session().started())
    }

    /// An intent request in an ongoing session.
    pub fn intent_envelope(name: &str) -> RequestEnvelope {
        intent_envelope_for(Intent::new(name))
    }

    /// An intent request with one filled slot.
    pub fn intent_envelope_with_slot(name: &str, slot: &str, value: &str) -> RequestEnvelope {
        intent_envelope_for(Intent::new(name).with_slot(slot, value))
    }

    fn intent_envelope_for(intent: Intent) -> RequestEnvelope {
        envelope(Request::IntentRequest(IntentRequest {
            request_id: REQUEST_ID.to_string(),
            timestamp: Utc::now(),
            locale: Some("en-US".to_string()),
            dialog_state: None,
            intent,
        }))
        .with_session(session())
    }

    /// A session-ended request.
    pub fn session_ended_envelope() -> RequestEnvelope {
        envelope(Request::SessionEndedRequest(SessionEndedRequest {
            request_id: REQUEST_ID.to_string(),
            timestamp: Utc::now(),
            locale: Some("en-US".to_string()),
            reason: SessionEndedReason::UserInitiated,
            error: None,
        }))
        .with_session(session())
    }

    /// An out-of-session `AudioPlayer.PlaybackStarted` event.
    pub fn audio_player_envelope() -> RequestEnvelope {
        envelope(Request::PlaybackStarted(AudioPlayerRequest {
            request_id: REQUEST_ID.to_string(),
            timestamp: Utc::now(),
            locale: Some("en-US".to_string()),
            token: Some("track-1".to_string()),
            offset_in_milliseconds: Some(0),
        }))
    }

    /// A request of a kind the SDK does not know.
    pub fn unknown_envelope() -> RequestEnvelope {
        envelope(Request::Unknown).with_session(session())
    }

    /// A handler input with no persistence and no API client.
    pub fn handler_input(envelope: RequestEnvelope) -> HandlerInput {
        let attributes_manager =
            AttributesManager::new(&envelope, None, PartitionKeyStrategy::UserId);
        HandlerInput::new(envelope, attributes_manager, None)
    }
}
