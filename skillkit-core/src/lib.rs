//! # skillkit-core
//!
//! Core traits for the skillkit request dispatch runtime.
//!
//! This crate is payload-agnostic: every trait is generic over an input type
//! `I` (what handlers receive) and an output type `O` (what they produce).
//! The `skillkit` crate instantiates it with its `HandlerInput` and
//! `Response`; standard implementations live in `skillkit-std`.
//!
//! # Dispatch Pipeline
//!
//! A single dispatch call walks these layers in order:
//!
//! ## Layer 1: Mapping ([`RequestMapper`])
//!
//! Selects the [`HandlerChain`] for the input. Mappers are consulted in
//! registration order and the first non-empty answer wins; within a mapper
//! the first chain whose predicate accepts the input wins.
//!
//! ## Layer 2: Interception ([`RequestInterceptor`], [`ResponseInterceptor`])
//!
//! Hooks around handler execution, either global (registered on the
//! dispatcher) or scoped to one chain. Ordering is an onion:
//!
//! ```text
//! global request → chain request → handler → chain response → global response
//! ```
//!
//! ## Layer 3: Adaptation ([`HandlerAdapter`])
//!
//! The chain's handler is opaque to the dispatcher. The first adapter whose
//! [`supports`](HandlerAdapter::supports) returns `true` executes it. This is
//! what lets one dispatcher drive several handler kinds (e.g. a
//! [`RequestHandler`] and a per-request-type callback interface).
//!
//! ## Layer 4: Recovery ([`ExceptionHandler`], [`ExceptionMapper`])
//!
//! Errors from any of the layers above are offered to the chain's own
//! exception handlers, then to the global [`ExceptionMapper`]. Unrecovered
//! errors surface as [`DispatchError::Unhandled`].
//!
//! # Static vs Dynamic Dispatch
//!
//! Handler, interceptor and exception handler traits use native `async fn`
//! for implementors. Each has an object-safe `Dyn*` companion with a blanket
//! implementation, which is what chains and dispatchers store.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod adapter;
mod chain;
mod dispatcher;
mod error;
mod exception;
mod handler;
mod interceptor;
mod mapper;

// Re-exports
pub use adapter::HandlerAdapter;
pub use chain::{ErasedHandler, HandlerChain, HandlerChainBuilder};
pub use dispatcher::RequestDispatcher;
pub use error::{BoxError, BoxFuture, ConfigurationError, DispatchError, DynError};
pub use exception::{DynExceptionHandler, ExceptionHandler, ExceptionMapper};
pub use handler::{DynRequestHandler, RequestHandler, SharedRequestHandler};
pub use interceptor::{
    DynRequestInterceptor, DynResponseInterceptor, FnRequestInterceptor, FnResponseInterceptor,
    RequestInterceptor, ResponseInterceptor,
};
pub use mapper::RequestMapper;
