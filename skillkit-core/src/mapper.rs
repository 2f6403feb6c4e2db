//! Request mapping.

use crate::chain::HandlerChain;

/// Selects the handler chain for an input.
///
/// A dispatcher consults its mappers in registration order and uses the first
/// chain returned. Mappers must not fall back to a second matching chain:
/// at most one chain handles any input.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot map inputs of type `{I}`",
    label = "missing `RequestMapper` implementation",
    note = "Implement `RequestMapper<{I}, {O}>` to select handler chains."
)]
pub trait RequestMapper<I, O>: Send + Sync + 'static {
    /// Returns the chain that should handle `input`, if any.
    fn handler_chain(&self, input: &I) -> Option<&HandlerChain<I, O>>;
}
