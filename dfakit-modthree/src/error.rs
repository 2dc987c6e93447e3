//! Classifier error types.

use dfakit_core::{ConfigurationError, TransitionError};
use thiserror::Error;

/// Errors from the modulo-three classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModThreeError {
    #[error(
        "input must be a binary string (only 0s and 1s): found '{character}' at position {position}"
    )]
    InvalidInput { position: usize, character: char },

    #[error("automaton configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("automaton error: {0}")]
    Transition(#[from] TransitionError),
}

impl ModThreeError {
    /// Returns an error code suitable for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            ModThreeError::InvalidInput { .. } => "INVALID_INPUT",
            ModThreeError::Configuration(e) => e.error_code(),
            ModThreeError::Transition(e) => e.error_code(),
        }
    }
}
