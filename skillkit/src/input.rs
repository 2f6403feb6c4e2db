//! The value every handler, interceptor and exception handler receives.

use crate::{attributes::AttributesManager, service::ServiceClientFactory};
use skillkit_model::{Context, Request, RequestEnvelope, RequestType, ResponseBuilder, Session};
use std::fmt;

/// One request envelope plus the per-call state built around it.
///
/// A `HandlerInput` lives for exactly one dispatch call. Handlers mutate its
/// attributes; the skill reads the session attributes back out once dispatch
/// returns.
pub struct HandlerInput {
    envelope: RequestEnvelope,
    attributes_manager: AttributesManager,
    service_client_factory: Option<ServiceClientFactory>,
}

impl HandlerInput {
    /// Wraps an envelope.
    pub fn new(
        envelope: RequestEnvelope,
        attributes_manager: AttributesManager,
        service_client_factory: Option<ServiceClientFactory>,
    ) -> Self {
        Self {
            envelope,
            attributes_manager,
            service_client_factory,
        }
    }

    /// The full request envelope.
    pub fn request_envelope(&self) -> &RequestEnvelope {
        &self.envelope
    }

    /// The request.
    pub fn request(&self) -> &Request {
        &self.envelope.request
    }

    /// The kind of the request.
    pub fn request_type(&self) -> RequestType {
        self.envelope.request.request_type()
    }

    /// The session, for in-session requests.
    pub fn session(&self) -> Option<&Session> {
        self.envelope.session.as_ref()
    }

    /// The device context.
    pub fn context(&self) -> Option<&Context> {
        self.envelope.context.as_ref()
    }

    /// Request, session and persistent attributes.
    pub fn attributes_manager(&self) -> &AttributesManager {
        &self.attributes_manager
    }

    /// Mutable access to the attributes.
    pub fn attributes_manager_mut(&mut self) -> &mut AttributesManager {
        &mut self.attributes_manager
    }

    /// Clients for the platform's outbound APIs. `None` when the skill has
    /// no API client configured.
    pub fn service_client_factory(&self) -> Option<&ServiceClientFactory> {
        self.service_client_factory.as_ref()
    }

    /// A fresh response builder.
    pub fn response_builder(&self) -> ResponseBuilder {
        ResponseBuilder::new()
    }

    /// Evaluates a predicate against this input.
    ///
    /// ```rust,ignore
    /// input.matches(intent_name("AMAZON.StopIntent"))
    /// ```
    pub fn matches<P>(&self, predicate: P) -> bool
    where
        P: Fn(&HandlerInput) -> bool,
    {
        predicate(self)
    }
}

impl fmt::Debug for HandlerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerInput")
            .field("envelope", &self.envelope)
            .finish_non_exhaustive()
    }
}
