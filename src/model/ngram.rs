//! Counted n-gram transition tables
//!
//! Training slides a window of `n - 1` symbols over the token stream. The
//! window starts filled with [`Symbol::Boundary`], so the first tokens are
//! learned as following the stream start, and the final window is recorded as
//! leading to the boundary.

use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

use crate::io::error::{RemixError, Result, invalid_parameter};
use crate::math::probability::weighted_index;
use crate::model::chain::MarkovChain;
use crate::model::{ModelBuilder, Symbol, TokenModel};

/// Observed successors of one context with their occurrence counts
#[derive(Clone, Debug)]
pub struct Successors<T> {
    symbols: Vec<Symbol<T>>,
    counts: Vec<u32>,
}

impl<T> Default for Successors<T> {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            counts: Vec::new(),
        }
    }
}

impl<T: PartialEq> Successors<T> {
    fn record(&mut self, symbol: Symbol<T>) {
        if let Some(position) = self.symbols.iter().position(|known| *known == symbol) {
            if let Some(count) = self.counts.get_mut(position) {
                *count = count.saturating_add(1);
            }
        } else {
            self.symbols.push(symbol);
            self.counts.push(1);
        }
    }

    /// How often `symbol` followed this context
    pub fn count_of(&self, symbol: &Symbol<T>) -> u32 {
        self.symbols
            .iter()
            .position(|known| known == symbol)
            .and_then(|position| self.counts.get(position))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of observations of this context
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Number of distinct successors
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Test if nothing followed this context
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Draw a successor in proportion to its count
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<&Symbol<T>> {
        weighted_index(&self.counts, rng).and_then(|index| self.symbols.get(index))
    }
}

/// Context-to-successor table learned from a token stream
#[derive(Clone, Debug)]
pub struct NGramModel<T> {
    context_len: usize,
    // First-seen order keeps seeded sampling reproducible
    contexts: Vec<Vec<Symbol<T>>>,
    successors: Vec<Successors<T>>,
    index: HashMap<Vec<Symbol<T>>, usize>,
}

impl<T: Clone + Eq + Hash> NGramModel<T> {
    fn empty(context_len: usize) -> Self {
        Self {
            context_len,
            contexts: Vec::new(),
            successors: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn record(&mut self, context: &[Symbol<T>], next: Symbol<T>) {
        let slot = if let Some(&slot) = self.index.get(context) {
            slot
        } else {
            let slot = self.contexts.len();
            self.contexts.push(context.to_vec());
            self.successors.push(Successors::default());
            self.index.insert(context.to_vec(), slot);
            slot
        };

        if let Some(successors) = self.successors.get_mut(slot) {
            successors.record(next);
        }
    }

    /// Observed contexts in first-seen order
    pub fn contexts(&self) -> &[Vec<Symbol<T>>] {
        &self.contexts
    }

    /// Successor counts of a context, if it was observed
    pub fn successors(&self, context: &[Symbol<T>]) -> Option<&Successors<T>> {
        self.index
            .get(context)
            .and_then(|&slot| self.successors.get(slot))
    }
}

impl<T: Clone + Eq + Hash> TokenModel<T> for NGramModel<T> {
    fn len(&self) -> usize {
        self.contexts.len()
    }

    fn context_len(&self) -> usize {
        self.context_len
    }

    fn chain<R: Rng>(&self, start: Option<Vec<T>>, rng: R) -> Result<impl Iterator<Item = T>> {
        MarkovChain::new(self, start, rng)
    }
}

/// Builds [`NGramModel`]s by counting every window of the token stream
#[derive(Clone, Copy, Debug, Default)]
pub struct NGramBuilder;

impl<T: Clone + Eq + Hash> ModelBuilder<T> for NGramBuilder {
    type Model = NGramModel<T>;

    fn build<I: IntoIterator<Item = T>>(
        &self,
        tokens: I,
        ngram_size: usize,
    ) -> Result<Self::Model> {
        if ngram_size == 0 {
            return Err(invalid_parameter(
                "ngram_size",
                &ngram_size,
                &"must be at least 1",
            ));
        }

        let context_len = ngram_size - 1;
        let mut model = NGramModel::empty(context_len);
        let mut window = vec![Symbol::Boundary; context_len];
        let mut observed = 0_usize;

        for token in tokens {
            model.record(&window, Symbol::Token(token.clone()));
            if !window.is_empty() {
                window.rotate_left(1);
                if let Some(last) = window.last_mut() {
                    *last = Symbol::Token(token);
                }
            }
            observed += 1;
        }

        if observed == 0 {
            return Err(RemixError::NoTrainingData);
        }

        model.record(&window, Symbol::Boundary);
        Ok(model)
    }
}
