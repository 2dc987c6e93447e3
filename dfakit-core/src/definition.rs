//! Automaton configuration and validated definition types.
//!
//! A configuration is plain data: the states, the alphabet, the initial
//! state, the accepting states and a partial transition table written as a
//! mapping of mappings.
//!
//! ```
//! use dfakit_core::{Definition, LabelledConfig};
//!
//! let config = LabelledConfig::new("even")
//!     .with_states(["even", "odd"])
//!     .with_alphabet(["a", "b"])
//!     .with_final_states(["even"])
//!     .with_transition("even", "a", "odd")
//!     .with_transition("odd", "a", "even")
//!     .with_transition("even", "b", "even")
//!     .with_transition("odd", "b", "odd");
//!
//! let definition = Definition::new(config).unwrap();
//! assert_eq!(definition.transition_count(), 4);
//! ```

use crate::error::{ConfigurationError, TransitionError};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Bounds shared by state and symbol identifiers.
///
/// Ordering keeps validation and introspection deterministic; `Display` is
/// how offending values are reported in errors.
pub trait Label: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// An open, text-labelled state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(pub String);

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for State {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An open, text-labelled input symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

/// Declarative automaton configuration, as supplied by the embedding code.
#[derive(Debug, Clone)]
pub struct AutomatonConfig<S, A> {
    /// All states.
    pub states: BTreeSet<S>,

    /// Input alphabet.
    pub alphabet: BTreeSet<A>,

    /// State the cursor starts in.
    pub initial_state: S,

    /// Accepting states.
    pub final_states: BTreeSet<S>,

    /// Partial transition table: state -> symbol -> next state.
    pub transition: BTreeMap<S, BTreeMap<A, S>>,
}

/// Configuration using open text labels.
pub type LabelledConfig = AutomatonConfig<State, Symbol>;

impl<S: Label, A: Label> AutomatonConfig<S, A> {
    /// Creates an empty configuration with the given initial state.
    ///
    /// The initial state is not added to `states`; it must be declared
    /// through [`with_states`](Self::with_states) like any other state.
    pub fn new(initial_state: impl Into<S>) -> Self {
        Self {
            states: BTreeSet::new(),
            alphabet: BTreeSet::new(),
            initial_state: initial_state.into(),
            final_states: BTreeSet::new(),
            transition: BTreeMap::new(),
        }
    }

    pub fn with_states(mut self, states: impl IntoIterator<Item = impl Into<S>>) -> Self {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    pub fn with_alphabet(mut self, symbols: impl IntoIterator<Item = impl Into<A>>) -> Self {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    pub fn with_final_states(mut self, states: impl IntoIterator<Item = impl Into<S>>) -> Self {
        self.final_states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Adds (or replaces) the transition `from --symbol--> to`.
    pub fn with_transition(
        mut self,
        from: impl Into<S>,
        symbol: impl Into<A>,
        to: impl Into<S>,
    ) -> Self {
        self.transition
            .entry(from.into())
            .or_default()
            .insert(symbol.into(), to.into());
        self
    }
}

/// Validated and indexed automaton definition.
///
/// Immutable once built; share it between instances with `Arc`.
#[derive(Debug, Clone)]
pub struct Definition<S, A> {
    states: HashSet<S>,
    alphabet: HashSet<A>,
    initial: S,
    final_states: HashSet<S>,

    /// Transitions indexed by source state, then symbol. States without any
    /// outgoing transition have no entry.
    transitions: HashMap<S, HashMap<A, S>>,
}

impl<S: Label, A: Label> Definition<S, A> {
    /// Validates a configuration and indexes its transition table.
    ///
    /// Checks run in a fixed order: initial state, final states, then each
    /// transition in ascending (state, symbol) order, target before symbol.
    pub fn new(config: AutomatonConfig<S, A>) -> Result<Self, ConfigurationError> {
        let AutomatonConfig {
            states,
            alphabet,
            initial_state,
            final_states,
            transition,
        } = config;

        if !states.contains(&initial_state) {
            return Err(ConfigurationError::InvalidInitialState {
                state: initial_state.to_string(),
            });
        }

        for state in &final_states {
            if !states.contains(state) {
                return Err(ConfigurationError::InvalidFinalState {
                    state: state.to_string(),
                });
            }
        }

        for (from, row) in &transition {
            for (symbol, to) in row {
                if !states.contains(to) {
                    return Err(ConfigurationError::UnknownTargetState {
                        from: from.to_string(),
                        symbol: symbol.to_string(),
                        to: to.to_string(),
                    });
                }
                if !alphabet.contains(symbol) {
                    return Err(ConfigurationError::UnknownTransitionSymbol {
                        from: from.to_string(),
                        symbol: symbol.to_string(),
                    });
                }
            }
            if !states.contains(from) && !row.is_empty() {
                tracing::warn!(
                    "transitions declared for unknown state '{}' are unreachable",
                    from
                );
            }
        }

        let transitions: HashMap<S, HashMap<A, S>> = transition
            .into_iter()
            .filter(|(_, row)| !row.is_empty())
            .map(|(from, row)| (from, row.into_iter().collect()))
            .collect();

        let definition = Self {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            initial: initial_state,
            final_states: final_states.into_iter().collect(),
            transitions,
        };

        tracing::debug!(
            "validated automaton: {} states, {} symbols, {} transitions, initial '{}'",
            definition.states.len(),
            definition.alphabet.len(),
            definition.transition_count(),
            definition.initial
        );

        Ok(definition)
    }

    /// Resolves the successor of `state` on `symbol`.
    ///
    /// This is the only transition primitive: the alphabet is checked first,
    /// then whether `state` has any transitions, then the specific entry.
    pub fn next_state(&self, state: &S, symbol: &A) -> Result<&S, TransitionError> {
        if !self.alphabet.contains(symbol) {
            return Err(TransitionError::UnknownSymbol {
                symbol: symbol.to_string(),
            });
        }

        let row = self
            .transitions
            .get(state)
            .ok_or_else(|| TransitionError::UndefinedStateTransitions {
                state: state.to_string(),
            })?;

        row.get(symbol)
            .ok_or_else(|| TransitionError::UndefinedTransition {
                state: state.to_string(),
                symbol: symbol.to_string(),
            })
    }

    /// Looks up a transition without classifying a miss.
    pub fn get_transition(&self, state: &S, symbol: &A) -> Option<&S> {
        self.transitions.get(state).and_then(|row| row.get(symbol))
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Returns true if the given state is declared.
    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Returns true if the given symbol is in the alphabet.
    pub fn has_symbol(&self, symbol: &A) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Returns true if the given state is accepting.
    pub fn is_final_state(&self, state: &S) -> bool {
        self.final_states.contains(state)
    }

    /// Returns all states, sorted.
    pub fn states(&self) -> Vec<&S> {
        sorted(&self.states)
    }

    /// Returns the alphabet, sorted.
    pub fn alphabet(&self) -> Vec<&A> {
        sorted(&self.alphabet)
    }

    /// Returns the accepting states, sorted.
    pub fn final_states(&self) -> Vec<&S> {
        sorted(&self.final_states)
    }

    /// Returns the symbols with a declared transition out of `state`, sorted.
    pub fn symbols_from(&self, state: &S) -> Vec<&A> {
        self.transitions
            .get(state)
            .map(|row| {
                let mut symbols: Vec<&A> = row.keys().collect();
                symbols.sort();
                symbols
            })
            .unwrap_or_default()
    }

    /// Total number of (state, symbol) entries in the transition table.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }
}

fn sorted<T: Ord>(set: &HashSet<T>) -> Vec<&T> {
    let mut items: Vec<&T> = set.iter().collect();
    items.sort();
    items
}
