//! # Exception Handling
//!
//! Recovery from errors raised anywhere in the dispatch pipeline.
//!
//! Errors are offered to exception handlers in two tiers: the selected
//! chain's own handlers first, then the dispatcher's [`ExceptionMapper`]. The
//! first handler whose [`can_handle`](ExceptionHandler::can_handle) accepts
//! the error produces the output in place of the normal response.

use crate::error::{BoxError, BoxFuture, DynError};
use std::future::Future;

/// Recovers from a dispatch error.
///
/// Use [`DynError::downcast_ref`] on `error` to match specific error types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `ExceptionHandler<{I}, {O}>`",
    label = "missing `ExceptionHandler` implementation",
    note = "Exception handlers must implement `can_handle` and `handle` for `{I}`."
)]
pub trait ExceptionHandler<I, O>: Send + Sync + 'static {
    /// Returns true if this handler can recover from `error`.
    fn can_handle(&self, input: &I, error: &DynError) -> bool;

    /// Produces the output to return instead of the failed response.
    fn handle(
        &self,
        input: &mut I,
        error: &DynError,
    ) -> impl Future<Output = Result<Option<O>, BoxError>> + Send;
}

/// Object-safe version of [`ExceptionHandler`].
pub trait DynExceptionHandler<I, O>: Send + Sync + 'static {
    /// See [`ExceptionHandler::can_handle`].
    fn can_handle_dyn(&self, input: &I, error: &DynError) -> bool;

    /// See [`ExceptionHandler::handle`].
    fn handle_dyn<'a>(
        &'a self,
        input: &'a mut I,
        error: &'a DynError,
    ) -> BoxFuture<'a, Result<Option<O>, BoxError>>;
}

impl<I, O, T> DynExceptionHandler<I, O> for T
where
    I: Send + 'static,
    O: Send + 'static,
    T: ExceptionHandler<I, O>,
{
    fn can_handle_dyn(&self, input: &I, error: &DynError) -> bool {
        self.can_handle(input, error)
    }

    fn handle_dyn<'a>(
        &'a self,
        input: &'a mut I,
        error: &'a DynError,
    ) -> BoxFuture<'a, Result<Option<O>, BoxError>> {
        Box::pin(self.handle(input, error))
    }
}

/// The global tier of exception handling.
pub trait ExceptionMapper<I, O>: Send + Sync + 'static {
    /// Returns the exception handler for `error`, if any.
    fn exception_handler(&self, input: &I, error: &DynError)
    -> Option<&dyn DynExceptionHandler<I, O>>;
}
