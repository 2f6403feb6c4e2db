//! Handler adapters.

use crate::{
    chain::ErasedHandler,
    error::{BoxError, BoxFuture},
};

/// Bridges the dispatcher to one kind of handler.
///
/// A chain's handler is type-erased; the dispatcher asks each registered
/// adapter in turn whether it [`supports`](HandlerAdapter::supports) it and
/// executes the first one that does. Exactly one adapter is expected to
/// support any given handler kind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot adapt handlers for `{I}` -> `{O}`",
    label = "missing `HandlerAdapter` implementation",
    note = "Implement `HandlerAdapter<{I}, {O}>` to bridge a handler kind to the dispatcher."
)]
pub trait HandlerAdapter<I, O>: Send + Sync + 'static {
    /// Returns true if this adapter can execute `handler`.
    fn supports(&self, handler: &ErasedHandler) -> bool;

    /// Executes `handler`. Only called when [`supports`](HandlerAdapter::supports)
    /// returned true for it.
    fn execute<'a>(
        &'a self,
        input: &'a mut I,
        handler: &'a ErasedHandler,
    ) -> BoxFuture<'a, Result<Option<O>, BoxError>>;
}
