//! # Interceptors
//!
//! Pre- and post-processing hooks run around handler execution.
//!
//! Interceptors are registered either globally (on the dispatcher) or on a
//! single handler chain. Request interceptors run global-first, response
//! interceptors run chain-first, so a global interceptor pair brackets
//! everything chain-scoped.
//!
//! An interceptor that returns `Err` aborts the pipeline; the error goes
//! through exception handling.

use crate::error::{BoxError, BoxFuture};
use std::future::Future;

/// Runs before the handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RequestInterceptor<{I}>`",
    label = "missing `RequestInterceptor` implementation",
    note = "Request interceptors must implement `process` for `{I}`."
)]
pub trait RequestInterceptor<I>: Send + Sync + 'static {
    /// Observes or modifies the input.
    fn process(&self, input: &mut I) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Runs after the handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `ResponseInterceptor<{I}, {O}>`",
    label = "missing `ResponseInterceptor` implementation",
    note = "Response interceptors must implement `process` for `{I}` and `{O}`."
)]
pub trait ResponseInterceptor<I, O>: Send + Sync + 'static {
    /// Observes or replaces the output.
    fn process(
        &self,
        input: &mut I,
        output: &mut Option<O>,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Object-safe version of [`RequestInterceptor`].
pub trait DynRequestInterceptor<I>: Send + Sync + 'static {
    /// See [`RequestInterceptor::process`].
    fn process_dyn<'a>(&'a self, input: &'a mut I) -> BoxFuture<'a, Result<(), BoxError>>;
}

impl<I, T> DynRequestInterceptor<I> for T
where
    I: Send + 'static,
    T: RequestInterceptor<I>,
{
    fn process_dyn<'a>(&'a self, input: &'a mut I) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(self.process(input))
    }
}

/// Object-safe version of [`ResponseInterceptor`].
pub trait DynResponseInterceptor<I, O>: Send + Sync + 'static {
    /// See [`ResponseInterceptor::process`].
    fn process_dyn<'a>(
        &'a self,
        input: &'a mut I,
        output: &'a mut Option<O>,
    ) -> BoxFuture<'a, Result<(), BoxError>>;
}

impl<I, O, T> DynResponseInterceptor<I, O> for T
where
    I: Send + 'static,
    O: Send + 'static,
    T: ResponseInterceptor<I, O>,
{
    fn process_dyn<'a>(
        &'a self,
        input: &'a mut I,
        output: &'a mut Option<O>,
    ) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(self.process(input, output))
    }
}

/// A request interceptor backed by a synchronous closure.
///
/// # Example
///
/// ```rust,ignore
/// let stamp = FnRequestInterceptor::new(|input: &mut HandlerInput| {
///     input.attributes_manager_mut().set_request_attribute("seen", true);
///     Ok(())
/// });
/// ```
pub struct FnRequestInterceptor<F> {
    func: F,
}

impl<F> FnRequestInterceptor<F> {
    /// Wraps a closure.
    pub fn new<I>(func: F) -> Self
    where
        F: Fn(&mut I) -> Result<(), BoxError>,
    {
        Self { func }
    }
}

impl<I, F> RequestInterceptor<I> for FnRequestInterceptor<F>
where
    I: Send,
    F: Fn(&mut I) -> Result<(), BoxError> + Send + Sync + 'static,
{
    async fn process(&self, input: &mut I) -> Result<(), BoxError> {
        (self.func)(input)
    }
}

/// A response interceptor backed by a synchronous closure.
pub struct FnResponseInterceptor<F> {
    func: F,
}

impl<F> FnResponseInterceptor<F> {
    /// Wraps a closure.
    pub fn new<I, O>(func: F) -> Self
    where
        F: Fn(&mut I, &mut Option<O>) -> Result<(), BoxError>,
    {
        Self { func }
    }
}

impl<I, O, F> ResponseInterceptor<I, O> for FnResponseInterceptor<F>
where
    I: Send,
    O: Send,
    F: Fn(&mut I, &mut Option<O>) -> Result<(), BoxError> + Send + Sync + 'static,
{
    async fn process(&self, input: &mut I, output: &mut Option<O>) -> Result<(), BoxError> {
        (self.func)(input, output)
    }
}
