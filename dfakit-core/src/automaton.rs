//! Automaton instances: a shared definition plus a current-state cursor.

use crate::definition::{AutomatonConfig, Definition, Label, State, Symbol};
use crate::error::{ConfigurationError, TransitionError};
use std::borrow::Borrow;
use std::sync::Arc;

/// A running automaton.
///
/// The definition is read-only and may be shared by any number of
/// instances; the cursor is owned by this instance alone.
#[derive(Debug, Clone)]
pub struct Automaton<S = State, A = Symbol> {
    definition: Arc<Definition<S, A>>,
    current_state: S,
}

/// Automaton using open text labels.
pub type LabelledAutomaton = Automaton<State, Symbol>;

impl<S: Label, A: Label> Automaton<S, A> {
    /// Validates the configuration and creates an instance positioned at the
    /// initial state.
    pub fn new(config: AutomatonConfig<S, A>) -> Result<Self, ConfigurationError> {
        let definition = Definition::new(config)?;
        Ok(Self::from_definition(Arc::new(definition)))
    }

    /// Creates an instance over an already validated definition.
    pub fn from_definition(definition: Arc<Definition<S, A>>) -> Self {
        let current_state = definition.initial_state().clone();
        Self {
            definition,
            current_state,
        }
    }

    pub fn definition(&self) -> &Arc<Definition<S, A>> {
        &self.definition
    }

    /// Moves the cursor back to the initial state.
    pub fn reset(&mut self) {
        self.current_state = self.definition.initial_state().clone();
    }

    /// Consumes one symbol. On error the cursor does not move.
    pub fn consume(&mut self, symbol: &A) -> Result<(), TransitionError> {
        let next = self
            .definition
            .next_state(&self.current_state, symbol)?
            .clone();

        tracing::trace!("{} --{}--> {}", self.current_state, symbol, next);

        self.current_state = next;
        Ok(())
    }

    /// Resets, then consumes `input` left to right.
    ///
    /// Stops at the first failing symbol; later symbols are not read.
    pub fn run<I>(&mut self, input: I) -> Result<&S, TransitionError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.reset();
        for symbol in input {
            self.consume(symbol.borrow())?;
        }
        Ok(&self.current_state)
    }

    /// Like [`run`](Self::run), but returns every state visited, starting
    /// with the initial state.
    pub fn trace<I>(&mut self, input: I) -> Result<Vec<S>, TransitionError>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.reset();
        let mut visited = vec![self.current_state.clone()];
        for symbol in input {
            self.consume(symbol.borrow())?;
            visited.push(self.current_state.clone());
        }
        Ok(visited)
    }

    /// Returns true if the cursor is on an accepting state.
    pub fn is_accepted(&self) -> bool {
        self.definition.is_final_state(&self.current_state)
    }

    pub fn current_state(&self) -> &S {
        &self.current_state
    }
}
