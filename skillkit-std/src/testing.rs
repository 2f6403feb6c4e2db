//! Testing utilities for skillkit dispatchers.
//!
//! This module provides utilities to make testing handler chains, interceptors
//! and exception handling easier.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered record of pipeline steps
//! - [`RecordingInterceptor`]: An interceptor that writes its label into a [`CallLog`]
//! - [`CountingHandler`]: A request handler with a scripted result that counts invocations
//! - [`ScriptedExceptionHandler`]: An exception handler with a scripted result

use skillkit_core::{
    BoxError, DynError, ExceptionHandler, RequestHandler, RequestInterceptor, ResponseInterceptor,
};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Call Log
// ============================================================================

/// An ordered record of labels, shared between the parts of a test pipeline.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let dispatcher = GenericRequestDispatcher::builder()
///     .add_request_interceptor(RecordingInterceptor::new("global", log.clone()))
///     // ...
///     .build()?;
///
/// dispatcher.dispatch(&mut input).await?;
/// assert_eq!(log.entries(), ["global", "chain"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label.
    pub fn record(&self, label: impl Into<String>) {
        lock(&self.entries).push(label.into());
    }

    /// Get a copy of the recorded labels.
    pub fn entries(&self) -> Vec<String> {
        lock(&self.entries).clone()
    }

    /// Clear all recorded labels.
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }
}

// ============================================================================
// Recording Interceptor
// ============================================================================

/// An interceptor that records its label every time it runs.
///
/// Works as both a request and a response interceptor for any input type.
#[derive(Debug, Clone)]
pub struct RecordingInterceptor {
    label: String,
    log: CallLog,
    error: Option<String>,
}

impl RecordingInterceptor {
    /// Create an interceptor that records `label` into `log`.
    pub fn new(label: impl Into<String>, log: CallLog) -> Self {
        Self {
            label: label.into(),
            log,
            error: None,
        }
    }

    /// Create an interceptor that records `label` and then fails with `message`.
    pub fn failing(label: impl Into<String>, log: CallLog, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::new(label, log)
        }
    }

    fn run(&self) -> Result<(), BoxError> {
        self.log.record(self.label.clone());
        match &self.error {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

impl<I: Send> RequestInterceptor<I> for RecordingInterceptor {
    async fn process(&self, _input: &mut I) -> Result<(), BoxError> {
        self.run()
    }
}

impl<I: Send, O: Send> ResponseInterceptor<I, O> for RecordingInterceptor {
    async fn process(&self, _input: &mut I, _output: &mut Option<O>) -> Result<(), BoxError> {
        self.run()
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A request handler that counts invocations and returns a scripted result.
///
/// # Example
///
/// ```rust,ignore
/// let handler = CountingHandler::returning("hello");
/// let counter = handler.clone();
///
/// // Use in a chain...
/// dispatcher.dispatch(&mut input).await?;
///
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler<O> {
    count: Arc<AtomicUsize>,
    accepts: bool,
    output: Option<O>,
    error: Option<String>,
}

impl<O> CountingHandler<O> {
    /// A handler that accepts every input and returns `output`.
    pub fn returning(output: O) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            accepts: true,
            output: Some(output),
            error: None,
        }
    }

    /// A handler that accepts every input and returns no output.
    pub fn silent() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            accepts: true,
            output: None,
            error: None,
        }
    }

    /// A handler that accepts every input and fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::silent()
        }
    }

    /// A handler whose `can_handle` always returns false.
    pub fn rejecting() -> Self {
        Self {
            accepts: false,
            ..Self::silent()
        }
    }

    /// Get the number of times `handle` was called.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<O: Clone> Clone for CountingHandler<O> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            accepts: self.accepts,
            output: self.output.clone(),
            error: self.error.clone(),
        }
    }
}

impl<I, O> RequestHandler<I, O> for CountingHandler<O>
where
    I: Send,
    O: Clone + Send + Sync + 'static,
{
    fn can_handle(&self, _input: &I) -> bool {
        self.accepts
    }

    async fn handle(&self, _input: &mut I) -> Result<Option<O>, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(message) => Err(message.clone().into()),
            None => Ok(self.output.clone()),
        }
    }
}

// ============================================================================
// Scripted Exception Handler
// ============================================================================

/// An exception handler that returns a scripted output.
///
/// Handles every error by default; [`matching`](Self::matching) restricts it to
/// errors whose message contains a given text.
pub struct ScriptedExceptionHandler<O> {
    count: Arc<AtomicUsize>,
    pattern: Option<String>,
    output: Option<O>,
    error: Option<String>,
}

impl<O> ScriptedExceptionHandler<O> {
    /// An exception handler that recovers with `output`.
    pub fn returning(output: O) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            pattern: None,
            output: Some(output),
            error: None,
        }
    }

    /// An exception handler that itself fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            pattern: None,
            output: None,
            error: Some(message.into()),
        }
    }

    /// Only handle errors whose message contains `pattern`.
    pub fn matching(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Get the number of times `handle` was called.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<O: Clone> Clone for ScriptedExceptionHandler<O> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            pattern: self.pattern.clone(),
            output: self.output.clone(),
            error: self.error.clone(),
        }
    }
}

impl<I, O> ExceptionHandler<I, O> for ScriptedExceptionHandler<O>
where
    I: Send,
    O: Clone + Send + Sync + 'static,
{
    fn can_handle(&self, _input: &I, error: &DynError) -> bool {
        self.pattern
            .as_deref()
            .is_none_or(|pattern| error.to_string().contains(pattern))
    }

    async fn handle(&self, _input: &mut I, _error: &DynError) -> Result<Option<O>, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(message) => Err(message.clone().into()),
            None => Ok(self.output.clone()),
        }
    }
}
