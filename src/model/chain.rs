use rand::Rng;
use std::hash::Hash;

use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::uniform_index;
use crate::model::{Symbol, TokenModel};
use crate::model::ngram::NGramModel;

/// Endless token stream sampled from an [`NGramModel`]
///
/// Each step draws a successor of the current context in proportion to how
/// often it was observed, yields it, and slides the context forward by one
/// token. When the draw hits the stream boundary, or the context was never
/// observed, the chain jumps to a uniformly chosen observed context and keeps
/// going. The boundary itself is never yielded.
pub struct MarkovChain<'a, T, R> {
    model: &'a NGramModel<T>,
    context: Vec<Symbol<T>>,
    rng: R,
    restarts: usize,
}

impl<'a, T: Clone + Eq + Hash, R: Rng> MarkovChain<'a, T, R> {
    /// Start a chain from `start`, or from a random observed context
    ///
    /// # Errors
    ///
    /// Returns an error if `start` does not hold exactly the model's context
    /// length in tokens.
    pub fn new(model: &'a NGramModel<T>, start: Option<Vec<T>>, rng: R) -> Result<Self> {
        let context_len = model.context_len();
        let mut chain = Self {
            model,
            context: Vec::with_capacity(context_len),
            rng,
            restarts: 0,
        };

        match start {
            Some(key) if key.len() != context_len => {
                return Err(invalid_parameter(
                    "start_key",
                    &format!("{} tokens", key.len()),
                    &format!("must hold exactly {context_len} tokens"),
                ));
            }
            Some(key) => chain.context = key.into_iter().map(Symbol::Token).collect(),
            None => {
                chain.jump();
            }
        }

        Ok(chain)
    }

    /// Times the chain jumped to a random context after a dead end
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Current context window
    pub fn context(&self) -> &[Symbol<T>] {
        &self.context
    }

    // Returns false only for a model with no contexts at all
    fn jump(&mut self) -> bool {
        let contexts = self.model.contexts();
        let picked = uniform_index(contexts.len(), &mut self.rng).and_then(|i| contexts.get(i));
        match picked {
            Some(context) => {
                self.context.clone_from(context);
                true
            }
            None => false,
        }
    }

    fn advance(&mut self, token: T) {
        if !self.context.is_empty() {
            self.context.rotate_left(1);
            if let Some(last) = self.context.last_mut() {
                *last = Symbol::Token(token);
            }
        }
    }
}

impl<T: Clone + Eq + Hash, R: Rng> Iterator for MarkovChain<'_, T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let drawn = self
                .model
                .successors(&self.context)
                .and_then(|successors| successors.sample(&mut self.rng))
                .cloned();

            if let Some(Symbol::Token(token)) = drawn {
                self.advance(token.clone());
                return Some(token);
            }

            if !self.jump() {
                return None;
            }
            self.restarts += 1;
        }
    }
}
