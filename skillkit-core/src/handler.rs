//! # Request Handlers
//!
//! The terminal endpoint of a handler chain: where business logic executes.
//!
//! A [`RequestHandler`] answers two questions: whether it wants the input
//! ([`can_handle`](RequestHandler::can_handle)), and what the output is
//! ([`handle`](RequestHandler::handle)). The predicate is synchronous and
//! must not have side effects; it may be evaluated for inputs the handler
//! never sees.

use crate::error::{BoxError, BoxFuture};
use std::{future::Future, sync::Arc};

/// A handler for one kind of input.
///
/// # Example
///
/// ```rust,ignore
/// struct HelloHandler;
///
/// impl RequestHandler<HandlerInput, Response> for HelloHandler {
///     fn can_handle(&self, input: &HandlerInput) -> bool {
///         input.matches(intent_name("HelloIntent"))
///     }
///
///     async fn handle(&self, input: &mut HandlerInput) -> Result<Option<Response>, BoxError> {
///         Ok(Some(Response::tell("Hello")))
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle input of type `{I}`",
    label = "missing `RequestHandler<{I}, {O}>` implementation",
    note = "Request handlers must implement `can_handle` and `handle` for `{I}`."
)]
pub trait RequestHandler<I, O>: Send + Sync + 'static {
    /// Returns true if this handler wants the input.
    fn can_handle(&self, input: &I) -> bool;

    /// Handles the input. `Ok(None)` means "handled, nothing to say".
    fn handle(&self, input: &mut I) -> impl Future<Output = Result<Option<O>, BoxError>> + Send;
}

/// Object-safe version of [`RequestHandler`].
pub trait DynRequestHandler<I, O>: Send + Sync + 'static {
    /// See [`RequestHandler::can_handle`].
    fn can_handle_dyn(&self, input: &I) -> bool;

    /// See [`RequestHandler::handle`].
    fn handle_dyn<'a>(&'a self, input: &'a mut I) -> BoxFuture<'a, Result<Option<O>, BoxError>>;
}

// Blanket implementation: Any RequestHandler is usable as a DynRequestHandler.
impl<I, O, T> DynRequestHandler<I, O> for T
where
    I: Send + 'static,
    O: Send + 'static,
    T: RequestHandler<I, O>,
{
    fn can_handle_dyn(&self, input: &I) -> bool {
        self.can_handle(input)
    }

    fn handle_dyn<'a>(&'a self, input: &'a mut I) -> BoxFuture<'a, Result<Option<O>, BoxError>> {
        Box::pin(self.handle(input))
    }
}

/// The shared form a [`RequestHandler`] takes inside a handler chain.
///
/// Adapters for request handlers look for this exact type behind the chain's
/// erased handler.
pub type SharedRequestHandler<I, O> = Arc<dyn DynRequestHandler<I, O>>;
