//! List-backed request mapper.

use skillkit_core::{HandlerChain, RequestMapper};

/// A mapper over an ordered list of handler chains.
///
/// The first chain whose predicate accepts the input is returned; later
/// chains are never consulted, even if they would also match.
pub struct GenericRequestMapper<I, O> {
    chains: Vec<HandlerChain<I, O>>,
}

impl<I, O> GenericRequestMapper<I, O> {
    /// Create a new mapper builder.
    pub fn builder() -> RequestMapperBuilder<I, O> {
        RequestMapperBuilder::new()
    }

    /// The registered chains, in order.
    pub fn handler_chains(&self) -> &[HandlerChain<I, O>] {
        &self.chains
    }
}

impl<I, O> RequestMapper<I, O> for GenericRequestMapper<I, O>
where
    I: 'static,
    O: 'static,
{
    fn handler_chain(&self, input: &I) -> Option<&HandlerChain<I, O>> {
        self.chains.iter().find(|chain| chain.can_handle(input))
    }
}

/// Builder for constructing a [`GenericRequestMapper`].
pub struct RequestMapperBuilder<I, O> {
    chains: Vec<HandlerChain<I, O>>,
}

impl<I, O> Default for RequestMapperBuilder<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> RequestMapperBuilder<I, O> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Append a handler chain.
    pub fn add_handler_chain(mut self, chain: HandlerChain<I, O>) -> Self {
        self.chains.push(chain);
        self
    }

    /// Build the mapper.
    pub fn build(self) -> GenericRequestMapper<I, O> {
        GenericRequestMapper {
            chains: self.chains,
        }
    }
}
