//! Standard interceptor implementations.

mod logging;

pub use logging::{LoggingRequestInterceptor, LoggingResponseInterceptor};
