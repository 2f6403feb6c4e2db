//! # Handler Chains
//!
//! A handler plus everything scoped to it: its selection predicate, its
//! request and response interceptors, and its exception handlers.
//!
//! The handler itself is stored type-erased. The dispatcher never looks at
//! it; a [`HandlerAdapter`] recognizes it by downcasting.
//!
//! [`HandlerAdapter`]: crate::HandlerAdapter

use crate::{
    error::DynError,
    exception::{DynExceptionHandler, ExceptionHandler},
    handler::{RequestHandler, SharedRequestHandler},
    interceptor::{
        DynRequestInterceptor, DynResponseInterceptor, RequestInterceptor, ResponseInterceptor,
    },
};
use std::{any::Any, sync::Arc};

/// A handler as stored in a chain.
pub type ErasedHandler = dyn Any + Send + Sync;

type Predicate<I> = dyn Fn(&I) -> bool + Send + Sync;

/// A handler with its chain-scoped interceptors and exception handlers.
pub struct HandlerChain<I, O> {
    handler: Arc<ErasedHandler>,
    predicate: Arc<Predicate<I>>,
    request_interceptors: Vec<Arc<dyn DynRequestInterceptor<I>>>,
    response_interceptors: Vec<Arc<dyn DynResponseInterceptor<I, O>>>,
    exception_handlers: Vec<Arc<dyn DynExceptionHandler<I, O>>>,
}

impl<I, O> HandlerChain<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Starts a chain around a [`RequestHandler`]. The chain is selected when
    /// the handler's `can_handle` accepts the input.
    pub fn for_request_handler<H>(handler: H) -> HandlerChainBuilder<I, O>
    where
        H: RequestHandler<I, O>,
    {
        let shared: SharedRequestHandler<I, O> = Arc::new(handler);
        let predicate_handler = shared.clone();
        HandlerChainBuilder::new(
            Arc::new(shared),
            Arc::new(move |input: &I| predicate_handler.can_handle_dyn(input)),
        )
    }

    /// Starts a chain around an arbitrary handler kind, selected by
    /// `predicate`. Some registered adapter must support `handler`.
    pub fn builder<H, P>(handler: H, predicate: P) -> HandlerChainBuilder<I, O>
    where
        H: Any + Send + Sync,
        P: Fn(&I) -> bool + Send + Sync + 'static,
    {
        HandlerChainBuilder::new(Arc::new(handler), Arc::new(predicate))
    }
}

impl<I: 'static, O: 'static> HandlerChain<I, O> {
    /// Returns true if this chain should handle the input.
    pub fn can_handle(&self, input: &I) -> bool {
        (self.predicate)(input)
    }

    /// The type-erased handler.
    pub fn handler(&self) -> &ErasedHandler {
        self.handler.as_ref()
    }

    /// Chain-scoped request interceptors, in registration order.
    pub fn request_interceptors(&self) -> &[Arc<dyn DynRequestInterceptor<I>>] {
        &self.request_interceptors
    }

    /// Chain-scoped response interceptors, in registration order.
    pub fn response_interceptors(&self) -> &[Arc<dyn DynResponseInterceptor<I, O>>] {
        &self.response_interceptors
    }

    /// The first chain-scoped exception handler that can handle `error`.
    pub fn exception_handler(
        &self,
        input: &I,
        error: &DynError,
    ) -> Option<&dyn DynExceptionHandler<I, O>> {
        self.exception_handlers
            .iter()
            .find(|h| h.can_handle_dyn(input, error))
            .map(|h| h.as_ref())
    }
}

impl<I, O> Clone for HandlerChain<I, O> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            predicate: self.predicate.clone(),
            request_interceptors: self.request_interceptors.clone(),
            response_interceptors: self.response_interceptors.clone(),
            exception_handlers: self.exception_handlers.clone(),
        }
    }
}

/// Builder for constructing a [`HandlerChain`].
pub struct HandlerChainBuilder<I, O> {
    chain: HandlerChain<I, O>,
}

impl<I, O> HandlerChainBuilder<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn new(handler: Arc<ErasedHandler>, predicate: Arc<Predicate<I>>) -> Self {
        Self {
            chain: HandlerChain {
                handler,
                predicate,
                request_interceptors: Vec::new(),
                response_interceptors: Vec::new(),
                exception_handlers: Vec::new(),
            },
        }
    }

    /// Register a chain-scoped request interceptor.
    pub fn add_request_interceptor<R: RequestInterceptor<I>>(mut self, interceptor: R) -> Self {
        self.chain.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Register a chain-scoped response interceptor.
    pub fn add_response_interceptor<R: ResponseInterceptor<I, O>>(mut self, interceptor: R) -> Self {
        self.chain.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Register a chain-scoped exception handler.
    pub fn add_exception_handler<E: ExceptionHandler<I, O>>(mut self, handler: E) -> Self {
        self.chain.exception_handlers.push(Arc::new(handler));
        self
    }

    /// Build the chain.
    pub fn build(self) -> HandlerChain<I, O> {
        self.chain
    }
}
