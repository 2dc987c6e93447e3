//! # dfakit-core
//!
//! Deterministic finite automaton engine.
//!
//! This crate provides:
//! - Automaton configuration and eager validation
//! - A checked transition primitive with distinct failure modes
//! - Automaton instances with run/reset semantics over a shared definition

pub mod automaton;
pub mod definition;
pub mod error;

pub use automaton::{Automaton, LabelledAutomaton};
pub use definition::{AutomatonConfig, Definition, Label, LabelledConfig, State, Symbol};
pub use error::{ConfigurationError, TransitionError};
