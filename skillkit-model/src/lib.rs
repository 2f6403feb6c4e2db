//! # skillkit-model
//!
//! Wire data model for the skillkit voice skill SDK.
//!
//! Everything in this crate is a plain value: it is deserialized from the
//! JSON the speech platform sends, inspected by handlers, and serialized back
//! as the response. Nothing here dispatches or performs I/O.
//!
//! # Inbound
//!
//! - [`RequestEnvelope`] - the top-level document: version, session, context, request
//! - [`Request`] - a sum type over every request kind, tagged by the JSON `type` field
//! - [`Session`] / [`Context`] - conversation state and device state
//!
//! # Outbound
//!
//! - [`ResponseEnvelope`] - version, returned session attributes, response body
//! - [`Response`] - speech, card, reprompt, directives, end-of-session flag
//! - [`ResponseBuilder`] - stepwise construction of a [`Response`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod context;
mod envelope;
pub mod request;
pub mod response;
pub mod session;

pub use context::{AudioPlayerState, Context, Device, PlayerActivity, SystemState};
pub use envelope::{PROTOCOL_VERSION, RequestEnvelope, ResponseEnvelope};
pub use request::{
    ConfirmationStatus, DialogState, Intent, IntentRequest, LaunchRequest, Request,
    RequestType, SessionEndedReason, SessionEndedRequest, SessionStartedRequest, Slot,
};
pub use response::{
    Card, Directive, OutputSpeech, PlayBehavior, Reprompt, Response, ResponseBuilder,
};
pub use session::{Application, Attributes, Permissions, Session, User};
