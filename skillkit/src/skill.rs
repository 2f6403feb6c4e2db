//! # Skill
//!
//! The entry point a host calls once per incoming request envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! let skill = Skill::builder()
//!     .add_request_handler(LaunchHandler)
//!     .add_request_handler(HelloHandler)
//!     .add_exception_handler(SorryHandler)
//!     .build()?;
//!
//! let response_json = skill.invoke_json(&request_json).await?;
//! ```

use crate::{
    attributes::{AttributesManager, PartitionKeyStrategy, PersistenceAdapter},
    input::HandlerInput,
    service::{ApiClient, ServiceClientFactory},
    speechlet::{Speechlet, SpeechletHandler, SpeechletHandlerAdapter},
};
use skillkit_core::{
    ConfigurationError, DispatchError, ExceptionHandler, HandlerChain, RequestDispatcher,
    RequestHandler, RequestInterceptor, ResponseInterceptor,
};
use skillkit_model::{Request, RequestEnvelope, Response, ResponseEnvelope};
use skillkit_std::{
    adapter::GenericHandlerAdapter,
    dispatcher::{DispatcherBuilder, GenericRequestDispatcher},
    mapping::{ExceptionMapperBuilder, RequestMapperBuilder},
};
use std::sync::Arc;
use thiserror::Error;

/// SDK identification sent on every response envelope.
pub const USER_AGENT: &str = concat!("skillkit-rust/", env!("CARGO_PKG_VERSION"));

/// Errors surfaced to the host.
#[derive(Error, Debug)]
pub enum SkillError {
    /// Dispatch failed and no exception handler recovered.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The request could not be parsed or the response serialized.
    #[error("invalid envelope JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configured skill.
pub struct Skill {
    dispatcher: GenericRequestDispatcher<HandlerInput, Response>,
    persistence_adapter: Option<Arc<dyn PersistenceAdapter>>,
    partition_key_strategy: PartitionKeyStrategy,
    api_client: Option<Arc<dyn ApiClient>>,
    user_agent: String,
}

impl Skill {
    /// Create a new skill builder.
    pub fn builder() -> SkillBuilder {
        SkillBuilder::new()
    }

    /// The user agent written on response envelopes.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Handles one request envelope.
    ///
    /// Always yields an envelope on success; when no handler produced a
    /// response its body is empty.
    pub async fn invoke(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        #[cfg(feature = "tracing")]
        {
            use tracing::Instrument;

            let span = tracing::info_span!(
                "dispatch",
                request_type = %envelope.request.request_type(),
                request_id = envelope.request.request_id().unwrap_or_default(),
            );
            self.invoke_inner(envelope).instrument(span).await
        }
        #[cfg(not(feature = "tracing"))]
        {
            self.invoke_inner(envelope).await
        }
    }

    /// Handles one request envelope in wire form.
    pub async fn invoke_json(&self, request: &[u8]) -> Result<Vec<u8>, SkillError> {
        let envelope = RequestEnvelope::from_slice(request)?;
        let response = self.invoke(envelope).await?;
        Ok(response.to_vec()?)
    }

    async fn invoke_inner(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        let attributes_manager = AttributesManager::new(
            &envelope,
            self.persistence_adapter.clone(),
            self.partition_key_strategy,
        );
        let service_client_factory = self
            .api_client
            .as_ref()
            .map(|client| ServiceClientFactory::new(client.clone(), &envelope));

        let mut input = HandlerInput::new(envelope, attributes_manager, service_client_factory);
        let response = self.dispatcher.dispatch(&mut input).await?;

        Ok(self.response_envelope(&input, response.unwrap_or_default()))
    }

    fn response_envelope(&self, input: &HandlerInput, response: Response) -> ResponseEnvelope {
        let session_ended = matches!(input.request(), Request::SessionEndedRequest(_));
        let session_attributes = if session_ended || response.should_end_session() == Some(true) {
            None
        } else {
            input.attributes_manager().session_attributes().ok().cloned()
        };

        ResponseEnvelope {
            session_attributes,
            user_agent: Some(self.user_agent.clone()),
            ..ResponseEnvelope::new(response)
        }
    }
}

/// Builder for constructing a [`Skill`].
pub struct SkillBuilder {
    chains: RequestMapperBuilder<HandlerInput, Response>,
    has_handlers: bool,
    dispatcher: DispatcherBuilder<HandlerInput, Response>,
    exception_mapper: Option<ExceptionMapperBuilder<HandlerInput, Response>>,
    persistence_adapter: Option<Arc<dyn PersistenceAdapter>>,
    partition_key_strategy: PartitionKeyStrategy,
    api_client: Option<Arc<dyn ApiClient>>,
    custom_user_agent: Option<String>,
}

impl Default for SkillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillBuilder {
    /// Create a new empty skill builder.
    pub fn new() -> Self {
        Self {
            chains: RequestMapperBuilder::new(),
            has_handlers: false,
            dispatcher: DispatcherBuilder::new(),
            exception_mapper: None,
            persistence_adapter: None,
            partition_key_strategy: PartitionKeyStrategy::default(),
            api_client: None,
            custom_user_agent: None,
        }
    }

    /// Register a request handler with no chain-scoped interceptors.
    pub fn add_request_handler<H>(self, handler: H) -> Self
    where
        H: RequestHandler<HandlerInput, Response>,
    {
        self.add_handler_chain(HandlerChain::for_request_handler(handler).build())
    }

    /// Register a handler chain. Chains are tried in registration order.
    pub fn add_handler_chain(mut self, chain: HandlerChain<HandlerInput, Response>) -> Self {
        self.chains = self.chains.add_handler_chain(chain);
        self.has_handlers = true;
        self
    }

    /// Register a speechlet. It claims every request that reaches it, so
    /// register it after any request handlers meant to take precedence.
    pub fn with_speechlet<S: Speechlet>(self, speechlet: S) -> Self {
        let chain = HandlerChain::<HandlerInput, Response>::builder(
            SpeechletHandler::new(speechlet),
            |_| true,
        );
        self.add_handler_chain(chain.build())
    }

    /// Register a global request interceptor.
    pub fn add_request_interceptor<R>(mut self, interceptor: R) -> Self
    where
        R: RequestInterceptor<HandlerInput>,
    {
        self.dispatcher = self.dispatcher.add_request_interceptor(interceptor);
        self
    }

    /// Register a global response interceptor.
    pub fn add_response_interceptor<R>(mut self, interceptor: R) -> Self
    where
        R: ResponseInterceptor<HandlerInput, Response>,
    {
        self.dispatcher = self.dispatcher.add_response_interceptor(interceptor);
        self
    }

    /// Register a global exception handler.
    pub fn add_exception_handler<E>(mut self, handler: E) -> Self
    where
        E: ExceptionHandler<HandlerInput, Response>,
    {
        let mapper = self.exception_mapper.take().unwrap_or_default();
        self.exception_mapper = Some(mapper.add_exception_handler(handler));
        self
    }

    /// Set the store for persistent attributes.
    pub fn with_persistence_adapter<P: PersistenceAdapter>(mut self, adapter: P) -> Self {
        self.persistence_adapter = Some(Arc::new(adapter));
        self
    }

    /// Set how persistent attributes are keyed. Defaults to the user id.
    pub fn with_partition_key_strategy(mut self, strategy: PartitionKeyStrategy) -> Self {
        self.partition_key_strategy = strategy;
        self
    }

    /// Set the HTTP transport for service clients.
    pub fn with_api_client<C: ApiClient>(mut self, client: C) -> Self {
        self.api_client = Some(Arc::new(client));
        self
    }

    /// Append `user_agent` to the SDK's own user agent.
    pub fn with_custom_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.custom_user_agent = Some(user_agent.into());
        self
    }

    /// Build the skill.
    ///
    /// Fails when no request handler, handler chain or speechlet was
    /// registered.
    pub fn build(self) -> Result<Skill, ConfigurationError> {
        if !self.has_handlers {
            return Err(ConfigurationError::MissingRequestHandler);
        }

        let mut dispatcher = self
            .dispatcher
            .add_request_mapper(self.chains.build())
            .add_handler_adapter(GenericHandlerAdapter::new())
            .add_handler_adapter(SpeechletHandlerAdapter);
        if let Some(mapper) = self.exception_mapper {
            dispatcher = dispatcher.with_exception_mapper(mapper.build());
        }

        let user_agent = match self.custom_user_agent {
            Some(custom) => format!("{USER_AGENT} {custom}"),
            None => USER_AGENT.to_string(),
        };

        Ok(Skill {
            dispatcher: dispatcher.build()?,
            persistence_adapter: self.persistence_adapter,
            partition_key_strategy: self.partition_key_strategy,
            api_client: self.api_client,
            user_agent,
        })
    }
}
