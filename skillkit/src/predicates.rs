//! Request predicates for `can_handle` implementations.
//!
//! Each function returns a closure usable with [`HandlerInput::matches`] or as
//! the predicate of a [`HandlerChain`](skillkit_core::HandlerChain).

use crate::input::HandlerInput;
use skillkit_model::RequestType;

/// Matches intent requests for the named intent.
pub fn intent_name(name: impl Into<String>) -> impl Fn(&HandlerInput) -> bool + Send + Sync + 'static {
    let name = name.into();
    move |input: &HandlerInput| {
        input
            .request()
            .as_intent_request()
            .is_some_and(|request| request.intent.name == name)
    }
}

/// Matches requests of the given kind.
pub fn request_type(kind: RequestType) -> impl Fn(&HandlerInput) -> bool + Send + Sync + 'static {
    move |input: &HandlerInput| input.request_type() == kind
}

/// Matches intent requests whose slot `slot` was filled with `value`.
pub fn slot_value(
    slot: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&HandlerInput) -> bool + Send + Sync + 'static {
    let slot = slot.into();
    let value = value.into();
    move |input: &HandlerInput| {
        input
            .request()
            .as_intent_request()
            .and_then(|request| request.slot_value(&slot))
            .is_some_and(|filled| filled == value)
    }
}

/// Matches the first request of a session.
pub fn new_session() -> impl Fn(&HandlerInput) -> bool + Send + Sync + 'static {
    |input: &HandlerInput| input.session().is_some_and(|session| session.new)
}
