//! Adapter for [`RequestHandler`](skillkit_core::RequestHandler) chains.

use skillkit_core::{
    BoxError, BoxFuture, DispatchError, ErasedHandler, HandlerAdapter, SharedRequestHandler,
};
use std::marker::PhantomData;

/// Executes chains built with
/// [`HandlerChain::for_request_handler`](skillkit_core::HandlerChain::for_request_handler).
pub struct GenericHandlerAdapter<I, O> {
    _phantom: PhantomData<fn() -> (I, O)>,
}

impl<I, O> GenericHandlerAdapter<I, O> {
    /// Create a new adapter.
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<I, O> Default for GenericHandlerAdapter<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> HandlerAdapter<I, O> for GenericHandlerAdapter<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn supports(&self, handler: &ErasedHandler) -> bool {
        handler.is::<SharedRequestHandler<I, O>>()
    }

    fn execute<'a>(
        &'a self,
        input: &'a mut I,
        handler: &'a ErasedHandler,
    ) -> BoxFuture<'a, Result<Option<O>, BoxError>> {
        match handler.downcast_ref::<SharedRequestHandler<I, O>>() {
            Some(handler) => handler.handle_dyn(input),
            None => Box::pin(std::future::ready(Err::<Option<O>, BoxError>(Box::new(
                DispatchError::AdapterNotFound,
            )))),
        }
    }
}
