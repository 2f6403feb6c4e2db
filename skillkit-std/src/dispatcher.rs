//! # Generic Request Dispatcher
//!
//! The standard [`RequestDispatcher`]: mappers pick the chain, adapters run
//! the handler, interceptors bracket it and exception handlers recover from
//! failures.
//!
//! # Example
//!
//! ```rust,ignore
//! let mapper = GenericRequestMapper::builder()
//!     .add_handler_chain(HandlerChain::for_request_handler(HelloHandler).build())
//!     .build();
//!
//! let dispatcher = GenericRequestDispatcher::builder()
//!     .add_request_mapper(mapper)
//!     .add_handler_adapter(GenericHandlerAdapter::new())
//!     .build()?;
//!
//! let output = dispatcher.dispatch(&mut input).await?;
//! ```

use skillkit_core::{
    BoxError, ConfigurationError, DispatchError, DynRequestInterceptor, DynResponseInterceptor,
    ExceptionMapper, HandlerAdapter, HandlerChain, RequestDispatcher, RequestInterceptor,
    RequestMapper, ResponseInterceptor,
};
use std::sync::Arc;

/// A dispatcher driven entirely by its configuration.
///
/// Steps are awaited one after another; nothing runs concurrently within a
/// dispatch call.
pub struct GenericRequestDispatcher<I, O> {
    request_mappers: Vec<Arc<dyn RequestMapper<I, O>>>,
    handler_adapters: Vec<Arc<dyn HandlerAdapter<I, O>>>,
    exception_mapper: Option<Arc<dyn ExceptionMapper<I, O>>>,
    request_interceptors: Vec<Arc<dyn DynRequestInterceptor<I>>>,
    response_interceptors: Vec<Arc<dyn DynResponseInterceptor<I, O>>>,
}

impl<I, O> GenericRequestDispatcher<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Create a new dispatcher builder.
    pub fn builder() -> DispatcherBuilder<I, O> {
        DispatcherBuilder::new()
    }

    fn resolve_chain(&self, input: &I) -> Option<&HandlerChain<I, O>> {
        self.request_mappers
            .iter()
            .find_map(|mapper| mapper.handler_chain(input))
    }

    async fn execute(
        &self,
        chain: Option<&HandlerChain<I, O>>,
        input: &mut I,
    ) -> Result<Option<O>, BoxError> {
        let chain = chain.ok_or(DispatchError::HandlerNotFound)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            global = self.request_interceptors.len(),
            chain = chain.request_interceptors().len(),
            "Running request interceptors"
        );
        for interceptor in &self.request_interceptors {
            interceptor.process_dyn(input).await?;
        }
        for interceptor in chain.request_interceptors() {
            interceptor.process_dyn(input).await?;
        }

        let handler = chain.handler();
        let adapter = self
            .handler_adapters
            .iter()
            .find(|adapter| adapter.supports(handler))
            .ok_or(DispatchError::AdapterNotFound)?;

        let mut output = adapter.execute(input, handler).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            chain = chain.response_interceptors().len(),
            global = self.response_interceptors.len(),
            has_output = output.is_some(),
            "Running response interceptors"
        );
        for interceptor in chain.response_interceptors() {
            interceptor.process_dyn(input, &mut output).await?;
        }
        for interceptor in &self.response_interceptors {
            interceptor.process_dyn(input, &mut output).await?;
        }

        Ok(output)
    }

    async fn recover(
        &self,
        chain: Option<&HandlerChain<I, O>>,
        input: &mut I,
        error: BoxError,
    ) -> Result<Option<O>, DispatchError> {
        let handler = chain
            .and_then(|chain| chain.exception_handler(input, error.as_ref()))
            .or_else(|| {
                self.exception_mapper
                    .as_ref()
                    .and_then(|mapper| mapper.exception_handler(input, error.as_ref()))
            });

        match handler {
            Some(handler) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%error, "Recovering with exception handler");
                handler
                    .handle_dyn(input, error.as_ref())
                    .await
                    .map_err(DispatchError::ExceptionHandler)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%error, "Unhandled dispatch error");
                Err(DispatchError::Unhandled(error))
            }
        }
    }
}

impl<I, O> RequestDispatcher<I, O> for GenericRequestDispatcher<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    async fn dispatch(&self, input: &mut I) -> Result<Option<O>, DispatchError> {
        let chain = self.resolve_chain(input);
        #[cfg(feature = "tracing")]
        tracing::debug!(matched = chain.is_some(), "Resolved handler chain");

        if chain.is_none() && self.exception_mapper.is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!("No handler chain matched, nothing to dispatch");
            return Ok(None);
        }

        match self.execute(chain, input).await {
            Ok(output) => Ok(output),
            Err(error) => self.recover(chain, input, error).await,
        }
    }
}

/// Builder for constructing a [`GenericRequestDispatcher`].
pub struct DispatcherBuilder<I, O> {
    request_mappers: Vec<Arc<dyn RequestMapper<I, O>>>,
    handler_adapters: Vec<Arc<dyn HandlerAdapter<I, O>>>,
    exception_mapper: Option<Arc<dyn ExceptionMapper<I, O>>>,
    request_interceptors: Vec<Arc<dyn DynRequestInterceptor<I>>>,
    response_interceptors: Vec<Arc<dyn DynResponseInterceptor<I, O>>>,
}

impl<I, O> Default for DispatcherBuilder<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> DispatcherBuilder<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Create a new empty dispatcher builder.
    pub fn new() -> Self {
        Self {
            request_mappers: Vec::new(),
            handler_adapters: Vec::new(),
            exception_mapper: None,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Register a request mapper. Mappers are consulted in registration order.
    pub fn add_request_mapper<M: RequestMapper<I, O>>(mut self, mapper: M) -> Self {
        self.request_mappers.push(Arc::new(mapper));
        self
    }

    /// Register a handler adapter. Adapters are consulted in registration order.
    pub fn add_handler_adapter<A: HandlerAdapter<I, O>>(mut self, adapter: A) -> Self {
        self.handler_adapters.push(Arc::new(adapter));
        self
    }

    /// Set the global exception mapper, replacing any previous one.
    pub fn with_exception_mapper<M: ExceptionMapper<I, O>>(mut self, mapper: M) -> Self {
        self.exception_mapper = Some(Arc::new(mapper));
        self
    }

    /// Register a global request interceptor.
    pub fn add_request_interceptor<R: RequestInterceptor<I>>(mut self, interceptor: R) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Register a global response interceptor.
    pub fn add_response_interceptor<R: ResponseInterceptor<I, O>>(mut self, interceptor: R) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Build the dispatcher.
    ///
    /// Fails when no request mapper or no handler adapter was registered.
    pub fn build(self) -> Result<GenericRequestDispatcher<I, O>, ConfigurationError> {
        if self.request_mappers.is_empty() {
            return Err(ConfigurationError::MissingRequestMapper);
        }
        if self.handler_adapters.is_empty() {
            return Err(ConfigurationError::MissingHandlerAdapter);
        }

        Ok(GenericRequestDispatcher {
            request_mappers: self.request_mappers,
            handler_adapters: self.handler_adapters,
            exception_mapper: self.exception_mapper,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}
