//! Logging interceptors for dispatch observation.

use skillkit_core::{BoxError, RequestInterceptor, ResponseInterceptor};
use std::fmt::Debug;

/// A request interceptor that logs every input before it is handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRequestInterceptor;

impl<I: Debug + Send> RequestInterceptor<I> for LoggingRequestInterceptor {
    async fn process(&self, input: &mut I) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(?input, "Dispatching input");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = input;
        }
        Ok(())
    }
}

/// A response interceptor that logs every output after it is produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingResponseInterceptor;

impl<I: Send, O: Debug + Send> ResponseInterceptor<I, O> for LoggingResponseInterceptor {
    async fn process(&self, _input: &mut I, output: &mut Option<O>) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(?output, "Dispatch produced output");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = output;
        }
        Ok(())
    }
}
