//! Dispatcher core trait.

use crate::error::DispatchError;
use std::future::Future;

/// Routes an input through the handler pipeline.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch inputs of type `{I}`",
    label = "missing `RequestDispatcher` implementation",
    note = "Implement `RequestDispatcher<{I}, {O}>` to handle dispatching."
)]
pub trait RequestDispatcher<I, O>: Send + Sync {
    /// Dispatch the input and return the handler's output.
    ///
    /// `Ok(None)` means no output: either the handler produced none, or no
    /// chain matched and no exception mapper is configured.
    fn dispatch(&self, input: &mut I) -> impl Future<Output = Result<Option<O>, DispatchError>> + Send;
}
