#![allow(dead_code)]

use skillkit_core::{BoxError, DynError, ExceptionHandler, HandlerAdapter, RequestHandler};
use skillkit_core::{BoxFuture, ErasedHandler};

// ============================================================================
// Test Input
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct TestInput {
    pub name: String,
    pub attributes: Vec<String>,
}

impl TestInput {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
        }
    }
}

// ============================================================================
// Test Handlers
// ============================================================================

/// Answers inputs with a given name by echoing it.
pub struct EchoHandler {
    pub name: &'static str,
}

impl RequestHandler<TestInput, String> for EchoHandler {
    fn can_handle(&self, input: &TestInput) -> bool {
        input.name == self.name
    }

    async fn handle(&self, input: &mut TestInput) -> Result<Option<String>, BoxError> {
        Ok(Some(format!("echo:{}", input.name)))
    }
}

/// Records an attribute, then fails.
pub struct MutatingFailingHandler;

impl RequestHandler<TestInput, String> for MutatingFailingHandler {
    fn can_handle(&self, _input: &TestInput) -> bool {
        true
    }

    async fn handle(&self, input: &mut TestInput) -> Result<Option<String>, BoxError> {
        input.attributes.push("touched".to_string());
        Err("handler failed".into())
    }
}

/// Recovers by reporting the attributes seen on the input.
pub struct AttributeReportingExceptionHandler;

impl ExceptionHandler<TestInput, String> for AttributeReportingExceptionHandler {
    fn can_handle(&self, _input: &TestInput, _error: &DynError) -> bool {
        true
    }

    async fn handle(
        &self,
        input: &mut TestInput,
        error: &DynError,
    ) -> Result<Option<String>, BoxError> {
        Ok(Some(format!("{error}:{}", input.attributes.join(","))))
    }
}

/// A handler kind that no adapter in these tests supports.
pub struct Orphan;

/// An adapter that never supports anything.
pub struct RefusingAdapter;

impl HandlerAdapter<TestInput, String> for RefusingAdapter {
    fn supports(&self, _handler: &ErasedHandler) -> bool {
        false
    }

    fn execute<'a>(
        &'a self,
        _input: &'a mut TestInput,
        _handler: &'a ErasedHandler,
    ) -> BoxFuture<'a, Result<Option<String>, BoxError>> {
        Box::pin(async { Err::<Option<String>, BoxError>("refused".into()) })
    }
}
