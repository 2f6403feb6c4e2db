//! Standard request and exception mappers.

mod exception;
mod request;

pub use exception::{ExceptionMapperBuilder, GenericExceptionMapper};
pub use request::{GenericRequestMapper, RequestMapperBuilder};
