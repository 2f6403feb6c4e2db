//! List-backed exception mapper.

use skillkit_core::{DynError, DynExceptionHandler, ExceptionHandler, ExceptionMapper};
use std::sync::Arc;

/// A global exception mapper over an ordered list of exception handlers.
pub struct GenericExceptionMapper<I, O> {
    handlers: Vec<Arc<dyn DynExceptionHandler<I, O>>>,
}

impl<I, O> GenericExceptionMapper<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Create a new mapper builder.
    pub fn builder() -> ExceptionMapperBuilder<I, O> {
        ExceptionMapperBuilder::new()
    }
}

impl<I, O> ExceptionMapper<I, O> for GenericExceptionMapper<I, O>
where
    I: 'static,
    O: 'static,
{
    fn exception_handler(
        &self,
        input: &I,
        error: &DynError,
    ) -> Option<&dyn DynExceptionHandler<I, O>> {
        self.handlers
            .iter()
            .find(|handler| handler.can_handle_dyn(input, error))
            .map(|handler| handler.as_ref())
    }
}

/// Builder for constructing a [`GenericExceptionMapper`].
pub struct ExceptionMapperBuilder<I, O> {
    handlers: Vec<Arc<dyn DynExceptionHandler<I, O>>>,
}

impl<I, O> Default for ExceptionMapperBuilder<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> ExceptionMapperBuilder<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append an exception handler.
    pub fn add_exception_handler<E: ExceptionHandler<I, O>>(mut self, handler: E) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Build the mapper.
    pub fn build(self) -> GenericExceptionMapper<I, O> {
        GenericExceptionMapper {
            handlers: self.handlers,
        }
    }
}
