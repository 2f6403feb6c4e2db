//! # Attributes
//!
//! Three attribute scopes are available to handlers:
//!
//! - **request**: lives for one dispatch call, shared by interceptors and the handler
//! - **session**: read from the request envelope and returned on the response
//!   envelope while the session lasts
//! - **persistent**: loaded lazily from a [`PersistenceAdapter`] and written back
//!   only when a handler calls
//!   [`save_persistent_attributes`](AttributesManager::save_persistent_attributes)

mod persistence;

pub use persistence::{PartitionKeyStrategy, PersistenceAdapter};

use serde_json::Value;
use skillkit_core::BoxError;
use skillkit_model::{Attributes, RequestEnvelope};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by [`AttributesManager`].
#[derive(Error, Debug)]
pub enum AttributesError {
    /// Session attributes were requested for a request without a session.
    #[error("session attributes are not available for out-of-session requests")]
    OutOfSession,

    /// Persistent attributes were requested but no adapter is configured.
    #[error("no persistence adapter is configured")]
    PersistenceNotConfigured,

    /// The envelope lacks the field persistent attributes are keyed by.
    #[error("cannot derive the persistence key: the request has no {0}")]
    MissingPartitionKey(PartitionKeyStrategy),

    /// The persistence adapter failed.
    #[error("persistence adapter failed: {0}")]
    Persistence(#[source] BoxError),
}

/// Per-call access to request, session and persistent attributes.
pub struct AttributesManager {
    request_attributes: Attributes,
    session_attributes: Option<Attributes>,
    persistent_attributes: Option<Attributes>,
    persistence_adapter: Option<Arc<dyn PersistenceAdapter>>,
    partition_key: Option<String>,
    partition_key_strategy: PartitionKeyStrategy,
}

impl AttributesManager {
    /// Creates the manager for one request envelope.
    pub fn new(
        envelope: &RequestEnvelope,
        persistence_adapter: Option<Arc<dyn PersistenceAdapter>>,
        partition_key_strategy: PartitionKeyStrategy,
    ) -> Self {
        Self {
            request_attributes: Attributes::new(),
            session_attributes: envelope.session.as_ref().map(|s| s.attributes.clone()),
            persistent_attributes: None,
            persistence_adapter,
            partition_key: partition_key_strategy.key(envelope),
            partition_key_strategy,
        }
    }

    /// Attributes scoped to this dispatch call.
    pub fn request_attributes(&self) -> &Attributes {
        &self.request_attributes
    }

    /// Mutable access to the request attributes.
    pub fn request_attributes_mut(&mut self) -> &mut Attributes {
        &mut self.request_attributes
    }

    /// Sets one request attribute.
    pub fn set_request_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.request_attributes.insert(key.into(), value.into());
    }

    /// Attributes of the current session.
    pub fn session_attributes(&self) -> Result<&Attributes, AttributesError> {
        self.session_attributes
            .as_ref()
            .ok_or(AttributesError::OutOfSession)
    }

    /// Mutable access to the session attributes.
    pub fn session_attributes_mut(&mut self) -> Result<&mut Attributes, AttributesError> {
        self.session_attributes
            .as_mut()
            .ok_or(AttributesError::OutOfSession)
    }

    /// Replaces the session attributes.
    pub fn set_session_attributes(&mut self, attributes: Attributes) -> Result<(), AttributesError> {
        *self.session_attributes_mut()? = attributes;
        Ok(())
    }

    /// Persistent attributes, loaded from the adapter on first access.
    ///
    /// Nothing stored yet reads as an empty map.
    pub async fn persistent_attributes(&mut self) -> Result<&Attributes, AttributesError> {
        Ok(self.persistent_attributes_mut().await?)
    }

    /// Mutable access to the persistent attributes, loading them first if
    /// needed. Changes are kept in memory until
    /// [`save_persistent_attributes`](Self::save_persistent_attributes).
    pub async fn persistent_attributes_mut(&mut self) -> Result<&mut Attributes, AttributesError> {
        if self.persistent_attributes.is_none() {
            let (adapter, key) = self.persistence_target()?;
            let loaded = adapter
                .get_attributes(&key)
                .await
                .map_err(AttributesError::Persistence)?;
            self.persistent_attributes = Some(loaded.unwrap_or_default());
        }
        Ok(self.persistent_attributes.get_or_insert_with(Attributes::new))
    }

    /// Replaces the persistent attributes in memory.
    pub fn set_persistent_attributes(&mut self, attributes: Attributes) -> Result<(), AttributesError> {
        if self.persistence_adapter.is_none() {
            return Err(AttributesError::PersistenceNotConfigured);
        }
        self.persistent_attributes = Some(attributes);
        Ok(())
    }

    /// Writes the persistent attributes to the adapter.
    ///
    /// A no-op if they were never loaded or set during this call.
    pub async fn save_persistent_attributes(&self) -> Result<(), AttributesError> {
        let (adapter, key) = self.persistence_target()?;
        let Some(attributes) = &self.persistent_attributes else {
            return Ok(());
        };
        adapter
            .save_attributes(&key, attributes)
            .await
            .map_err(AttributesError::Persistence)
    }

    /// Deletes the stored persistent attributes and clears them in memory.
    pub async fn delete_persistent_attributes(&mut self) -> Result<(), AttributesError> {
        let (adapter, key) = self.persistence_target()?;
        adapter
            .delete_attributes(&key)
            .await
            .map_err(AttributesError::Persistence)?;
        self.persistent_attributes = None;
        Ok(())
    }

    fn persistence_target(&self) -> Result<(Arc<dyn PersistenceAdapter>, String), AttributesError> {
        let adapter = self
            .persistence_adapter
            .clone()
            .ok_or(AttributesError::PersistenceNotConfigured)?;
        let key = self
            .partition_key
            .clone()
            .ok_or(AttributesError::MissingPartitionKey(self.partition_key_strategy))?;
        Ok((adapter, key))
    }
}
