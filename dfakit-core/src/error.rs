//! Core error types.
//!
//! Construction failures and run-time failures are separate types: a
//! [`ConfigurationError`] means no automaton exists at all, while a
//! [`TransitionError`] leaves a usable automaton with its cursor untouched.

use thiserror::Error;

/// Errors raised while validating an automaton configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("invalid initial state: '{state}' is not in the states list")]
    InvalidInitialState { state: String },

    #[error("invalid final state: '{state}' is not in the states list")]
    InvalidFinalState { state: String },

    #[error("transition from '{from}' on '{symbol}' targets unknown state '{to}'")]
    UnknownTargetState {
        from: String,
        symbol: String,
        to: String,
    },

    #[error("transition from '{from}' uses symbol '{symbol}' which is not in the alphabet")]
    UnknownTransitionSymbol { from: String, symbol: String },
}

impl ConfigurationError {
    /// Returns an error code suitable for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigurationError::InvalidInitialState { .. } => "INVALID_INITIAL_STATE",
            ConfigurationError::InvalidFinalState { .. } => "INVALID_FINAL_STATE",
            ConfigurationError::UnknownTargetState { .. } => "UNKNOWN_TARGET_STATE",
            ConfigurationError::UnknownTransitionSymbol { .. } => "UNKNOWN_TRANSITION_SYMBOL",
        }
    }
}

/// Errors raised while consuming input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("symbol '{symbol}' not in alphabet")]
    UnknownSymbol { symbol: String },

    #[error("no transitions defined for state '{state}'")]
    UndefinedStateTransitions { state: String },

    #[error("no transition defined for symbol '{symbol}' from state '{state}'")]
    UndefinedTransition { state: String, symbol: String },
}

impl TransitionError {
    /// Returns true if the error is an ordinary rejection of the input, as
    /// opposed to alphabet misuse or an incomplete automaton.
    pub fn is_rejection(&self) -> bool {
        matches!(self, TransitionError::UndefinedTransition { .. })
    }

    /// Returns an error code suitable for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransitionError::UnknownSymbol { .. } => "UNKNOWN_SYMBOL",
            TransitionError::UndefinedStateTransitions { .. } => "UNDEFINED_STATE_TRANSITIONS",
            TransitionError::UndefinedTransition { .. } => "UNDEFINED_TRANSITION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::UnknownTargetState {
            from: "a".to_string(),
            symbol: "x".to_string(),
            to: "z".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "transition from 'a' on 'x' targets unknown state 'z'"
        );
        assert_eq!(err.error_code(), "UNKNOWN_TARGET_STATE");
    }

    #[test]
    fn test_only_undefined_transition_is_rejection() {
        let unknown = TransitionError::UnknownSymbol {
            symbol: "2".to_string(),
        };
        let dead_end = TransitionError::UndefinedStateTransitions {
            state: "sink".to_string(),
        };
        let rejected = TransitionError::UndefinedTransition {
            state: "a".to_string(),
            symbol: "1".to_string(),
        };

        assert!(!unknown.is_rejection());
        assert!(!dead_end.is_rejection());
        assert!(rejected.is_rejection());
        assert_eq!(rejected.error_code(), "UNDEFINED_TRANSITION");
    }
}
