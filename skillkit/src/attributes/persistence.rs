//! Persistence collaborator for persistent attributes.

use async_trait::async_trait;
use skillkit_core::BoxError;
use skillkit_model::{Attributes, RequestEnvelope};
use std::fmt;

/// An external store for attributes that outlive a session.
///
/// The SDK never persists anything on its own; a handler loads and saves
/// through [`AttributesManager`](super::AttributesManager), which delegates
/// here.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync + 'static {
    /// Loads the attributes stored under `key`, if any.
    async fn get_attributes(&self, key: &str) -> Result<Option<Attributes>, BoxError>;

    /// Stores `attributes` under `key`, replacing what was there.
    async fn save_attributes(&self, key: &str, attributes: &Attributes) -> Result<(), BoxError>;

    /// Removes whatever is stored under `key`.
    async fn delete_attributes(&self, key: &str) -> Result<(), BoxError>;
}

/// How the persistence key is derived from a request envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionKeyStrategy {
    /// Key by user id. Prefers the context's user over the session's.
    #[default]
    UserId,
    /// Key by the context's device id.
    DeviceId,
}

impl PartitionKeyStrategy {
    /// Derives the key, or `None` when the envelope lacks the field.
    pub fn key(self, envelope: &RequestEnvelope) -> Option<String> {
        match self {
            Self::UserId => envelope
                .context
                .as_ref()
                .and_then(|context| context.system.user.as_ref())
                .or_else(|| envelope.session.as_ref().and_then(|s| s.user.as_ref()))
                .map(|user| user.user_id.clone()),
            Self::DeviceId => envelope
                .context
                .as_ref()
                .and_then(|context| context.system.device_id())
                .map(str::to_string),
        }
    }
}

impl fmt::Display for PartitionKeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserId => f.write_str("user id"),
            Self::DeviceId => f.write_str("device id"),
        }
    }
}
