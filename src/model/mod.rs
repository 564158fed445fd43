//! Markov sequence models over colour tokens
//!
//! The remix only depends on the [`ModelBuilder`] and [`TokenModel`] traits:
//! a builder turns a token stream into a model, and a model produces an
//! endless, randomly sampled chain of tokens. [`ngram::NGramBuilder`] is the
//! bundled backend; any other Markov implementation can be swapped in without
//! touching the fill.

/// Endless sampled token streams over an n-gram model
pub mod chain;
/// Counted n-gram transition tables
pub mod ngram;

use rand::Rng;

use crate::io::error::Result;

/// A training-stream symbol: either a real token or the stream boundary
///
/// The boundary is kept out of band so no real token (pure black included)
/// can ever be mistaken for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol<T> {
    /// Start or end of the training stream
    Boundary,
    /// A real token
    Token(T),
}

impl<T> Symbol<T> {
    /// The wrapped token, if this is not the boundary
    pub fn token(self) -> Option<T> {
        match self {
            Self::Token(token) => Some(token),
            Self::Boundary => None,
        }
    }

    /// Test for the boundary marker
    pub const fn is_boundary(&self) -> bool {
        matches!(self, Self::Boundary)
    }
}

/// A trained model that can be sampled as a Markov chain
pub trait TokenModel<T> {
    /// Number of distinct contexts observed during training
    fn len(&self) -> usize;

    /// Test if the model observed no contexts
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tokens in each context (n-gram size minus one)
    fn context_len(&self) -> usize;

    /// Start an endless chain of sampled tokens
    ///
    /// With no `start` key the initial context is picked uniformly among the
    /// observed ones. The returned iterator never ends on its own; callers
    /// bound how much they take.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` does not hold exactly
    /// [`context_len`](Self::context_len) tokens.
    fn chain<R: Rng>(&self, start: Option<Vec<T>>, rng: R) -> Result<impl Iterator<Item = T>>;
}

/// Trains a [`TokenModel`] from a token stream
pub trait ModelBuilder<T> {
    /// Model type produced by this builder
    type Model: TokenModel<T>;

    /// Consume a token stream and build a model with the given n-gram size
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `ngram_size` is zero
    /// - The token stream is empty
    fn build<I: IntoIterator<Item = T>>(&self, tokens: I, ngram_size: usize)
    -> Result<Self::Model>;
}
