//! Error types for the dispatch runtime.
//!
//! - [`DispatchError`] - failures surfaced by a dispatch call
//! - [`ConfigurationError`] - invalid dispatcher or skill configuration, reported at build time
//! - [`BoxError`] - the error type handlers, interceptors and adapters return

use std::{future::Future, pin::Pin};
use thiserror::Error;

/// The unsized error type handed to exception handlers.
pub type DynError = dyn std::error::Error + Send + Sync + 'static;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<DynError>;

/// A boxed, `Send` future borrowing from `'a`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Errors that can occur during dispatch.
///
/// `HandlerNotFound` and `AdapterNotFound` are raised inside the pipeline and
/// go through exception handling like any other error; a caller only sees them
/// as the source of [`DispatchError::Unhandled`].
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler chain accepted the input.
    #[error("unable to find a suitable request handler")]
    HandlerNotFound,

    /// No handler adapter supports the selected chain's handler.
    #[error("unable to find a suitable handler adapter")]
    AdapterNotFound,

    /// An error no exception handler could handle. The original error is the
    /// source.
    #[error("unhandled exception during dispatch: {0}")]
    Unhandled(#[source] BoxError),

    /// The exception handler itself failed.
    #[error("exception handler failed: {0}")]
    ExceptionHandler(#[source] BoxError),
}

impl DispatchError {
    /// Returns the wrapped error of `Unhandled` and `ExceptionHandler`.
    pub fn cause(&self) -> Option<&DynError> {
        match self {
            Self::Unhandled(e) | Self::ExceptionHandler(e) => Some(e.as_ref()),
            Self::HandlerNotFound | Self::AdapterNotFound => None,
        }
    }
}

/// Errors in dispatcher or skill configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The dispatcher was built without a request mapper.
    #[error("at least one request mapper is required")]
    MissingRequestMapper,

    /// The dispatcher was built without a handler adapter.
    #[error("at least one handler adapter is required")]
    MissingHandlerAdapter,

    /// The skill was built without any request handler.
    #[error("at least one request handler is required")]
    MissingRequestHandler,
}
