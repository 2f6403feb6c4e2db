//! # skillkit - Voice Skill SDK
//!
//! `skillkit` turns speech-platform request envelopes into response envelopes.
//! A [`Skill`] owns a dispatcher configured with request handlers (or a
//! [`Speechlet`]), interceptors and exception handlers; the host hands it each
//! incoming envelope and sends back what it returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use skillkit::prelude::*;
//!
//! struct HelloHandler;
//!
//! impl RequestHandler<HandlerInput, Response> for HelloHandler {
//!     fn can_handle(&self, input: &HandlerInput) -> bool {
//!         input.matches(intent_name("HelloIntent"))
//!     }
//!
//!     async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
//!         Ok(Some(input.response_builder().speak("Hello!").build()))
//!     }
//! }
//!
//! let skill = Skill::builder().add_request_handler(HelloHandler).build()?;
//! let response = skill.invoke_json(&body).await?;
//! ```
//!
//! ## Crates
//!
//! - `skillkit-core`: generic dispatch traits
//! - `skillkit-std`: the standard dispatcher, mappers and adapters
//! - `skillkit-model`: the wire data model and [`ResponseBuilder`]
//!
//! This crate instantiates the runtime with [`HandlerInput`] and [`Response`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod attributes;
mod input;
pub mod predicates;
pub mod service;
mod skill;
pub mod speechlet;
pub mod testing;

pub use attributes::{AttributesError, AttributesManager, PartitionKeyStrategy, PersistenceAdapter};
pub use input::HandlerInput;
pub use skill::{Skill, SkillBuilder, SkillError, USER_AGENT};
pub use speechlet::{Speechlet, SpeechletError};

pub use skillkit_core::{
    BoxError, ConfigurationError, DispatchError, DynError, ExceptionHandler,
    FnRequestInterceptor, FnResponseInterceptor, HandlerChain, HandlerChainBuilder,
    RequestHandler, RequestInterceptor, ResponseInterceptor,
};
pub use skillkit_model::{
    Attributes, Card, Context, Directive, Intent, IntentRequest, OutputSpeech, Request,
    RequestEnvelope, RequestType, Response, ResponseBuilder, ResponseEnvelope, Session,
};
pub use skillkit_std::interceptors::{LoggingRequestInterceptor, LoggingResponseInterceptor};

/// The wire data model.
pub mod model {
    #![allow(clippy::wildcard_imports)]
    pub use skillkit_model::*;
}

/// Prelude module - common imports for skills.
///
/// # Usage
///
/// ```rust,ignore
/// use skillkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        DynError,
        // Handler traits
        ExceptionHandler,
        HandlerInput,
        RequestHandler,
        RequestInterceptor,
        // Response
        Response,
        ResponseBuilder,
        ResponseInterceptor,
        // Skill
        Skill,
        SkillError,
        Speechlet,
        // Predicates
        predicates::{intent_name, request_type, slot_value},
    };
}
