//! # skillkit-std
//!
//! Standard implementations of the skillkit runtime traits.
//!
//! This crate provides:
//! - **Dispatch**: [`GenericRequestDispatcher`], [`DispatcherBuilder`]
//! - **Mapping**: [`GenericRequestMapper`], [`GenericExceptionMapper`]
//! - **Adaptation**: [`GenericHandlerAdapter`] for request handler chains
//! - **Standard interceptors**: Logging
//! - **Testing utilities**: [`testing`]
//!
//! [`GenericRequestDispatcher`]: dispatcher::GenericRequestDispatcher
//! [`DispatcherBuilder`]: dispatcher::DispatcherBuilder
//! [`GenericRequestMapper`]: mapping::GenericRequestMapper
//! [`GenericExceptionMapper`]: mapping::GenericExceptionMapper
//! [`GenericHandlerAdapter`]: adapter::GenericHandlerAdapter

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use skillkit_core;

// Modules
pub mod adapter;
pub mod dispatcher;
pub mod interceptors;
pub mod mapping;
pub mod testing;
