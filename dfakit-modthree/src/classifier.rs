//! The modulo-three classifier.

use crate::error::ModThreeError;
use crate::state::{Bit, ModThreeState};
use dfakit_core::{Automaton, AutomatonConfig, Definition};
use std::sync::Arc;

/// Returns the fixed modulo-three configuration.
///
/// Reading bit `b` in state `Sr` moves to `S((2r + b) mod 3)`. Every state is
/// accepting; the answer is read from the final state, not from acceptance.
pub fn mod_three_config() -> AutomatonConfig<ModThreeState, Bit> {
    use Bit::{One, Zero};
    use ModThreeState::{S0, S1, S2};

    AutomatonConfig::<ModThreeState, Bit>::new(S0)
        .with_states(ModThreeState::ALL)
        .with_alphabet(Bit::ALL)
        .with_final_states(ModThreeState::ALL)
        .with_transition(S0, Zero, S0)
        .with_transition(S0, One, S1)
        .with_transition(S1, Zero, S2)
        .with_transition(S1, One, S0)
        .with_transition(S2, Zero, S1)
        .with_transition(S2, One, S2)
}

/// Parses a binary string, rejecting anything but `0` and `1`.
pub fn parse_bits(input: &str) -> Result<Vec<Bit>, ModThreeError> {
    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            Bit::from_char(character).ok_or(ModThreeError::InvalidInput {
                position,
                character,
            })
        })
        .collect()
}

/// Computes remainders of binary numbers modulo three.
#[derive(Debug, Clone)]
pub struct ModThree {
    automaton: Automaton<ModThreeState, Bit>,
}

impl ModThree {
    /// Builds the classifier, validating the fixed table.
    pub fn new() -> Result<Self, ModThreeError> {
        let automaton = Automaton::new(mod_three_config())?;
        Ok(Self { automaton })
    }

    /// Builds a classifier sharing an existing validated definition.
    pub fn with_definition(definition: Arc<Definition<ModThreeState, Bit>>) -> Self {
        Self {
            automaton: Automaton::from_definition(definition),
        }
    }

    /// Returns `input mod 3` for a binary string, most significant bit
    /// first. The empty string is zero.
    pub fn mod_three(&mut self, input: &str) -> Result<u8, ModThreeError> {
        Ok(self.classify(input)?.remainder())
    }

    /// Runs the automaton over `input` and returns the final state.
    pub fn classify(&mut self, input: &str) -> Result<ModThreeState, ModThreeError> {
        let bits = parse_bits(input)?;
        let state = *self.automaton.run(&bits)?;
        tracing::debug!("classified {} bit(s) as {}", bits.len(), state);
        Ok(state)
    }

    /// Returns every state visited while reading `input`, initial included.
    pub fn trace(&mut self, input: &str) -> Result<Vec<ModThreeState>, ModThreeError> {
        let bits = parse_bits(input)?;
        Ok(self.automaton.trace(&bits)?)
    }

    /// Reads one more bit without resetting.
    pub fn step(&mut self, bit: Bit) -> Result<ModThreeState, ModThreeError> {
        self.automaton.consume(&bit)?;
        Ok(*self.automaton.current_state())
    }

    pub fn reset(&mut self) {
        self.automaton.reset();
    }

    pub fn current_state(&self) -> ModThreeState {
        *self.automaton.current_state()
    }

    pub fn is_accepted(&self) -> bool {
        self.automaton.is_accepted()
    }

    pub fn automaton(&self) -> &Automaton<ModThreeState, Bit> {
        &self.automaton
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_valid() {
        let def = Definition::new(mod_three_config()).unwrap();
        assert_eq!(def.transition_count(), 6);
        assert_eq!(def.final_states().len(), 3);
        assert_eq!(*def.initial_state(), ModThreeState::S0);
    }

    #[test]
    fn test_parse_bits() {
        assert_eq!(
            parse_bits("101").unwrap(),
            vec![Bit::One, Bit::Zero, Bit::One]
        );
        assert!(parse_bits("").unwrap().is_empty());
        assert_eq!(
            parse_bits("10a1").unwrap_err(),
            ModThreeError::InvalidInput {
                position: 2,
                character: 'a'
            }
        );
    }

    #[test]
    fn test_step_transitions() {
        let mut fsm = ModThree::new().unwrap();
        assert_eq!(fsm.current_state(), ModThreeState::S0);

        assert_eq!(fsm.step(Bit::One).unwrap(), ModThreeState::S1);
        assert_eq!(fsm.step(Bit::One).unwrap(), ModThreeState::S0);
        assert_eq!(fsm.step(Bit::Zero).unwrap(), ModThreeState::S0);

        fsm.reset();
        assert_eq!(fsm.step(Bit::One).unwrap(), ModThreeState::S1);
        assert_eq!(fsm.step(Bit::Zero).unwrap(), ModThreeState::S2);
    }

    #[test]
    fn test_classify() {
        let mut fsm = ModThree::new().unwrap();
        assert_eq!(fsm.classify("101").unwrap(), ModThreeState::S2);
        assert!(fsm.is_accepted());
    }

    #[test]
    fn test_invalid_input_leaves_automaton_alone() {
        let mut fsm = ModThree::new().unwrap();
        fsm.step(Bit::One).unwrap();

        let err = fsm.mod_three("10a1").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err
            .to_string()
            .starts_with("input must be a binary string"));
        assert_eq!(fsm.current_state(), ModThreeState::S1);
    }

    #[test]
    fn test_trace() {
        let mut fsm = ModThree::new().unwrap();
        assert_eq!(
            fsm.trace("1101").unwrap(),
            vec![
                ModThreeState::S0,
                ModThreeState::S1,
                ModThreeState::S0,
                ModThreeState::S0,
                ModThreeState::S1,
            ]
        );
    }

    #[test]
    fn test_shared_definition() {
        let shared = Arc::new(Definition::new(mod_three_config()).unwrap());
        let mut a = ModThree::with_definition(Arc::clone(&shared));
        let mut b = ModThree::with_definition(shared);

        assert_eq!(a.mod_three("1110").unwrap(), 2);
        assert_eq!(b.mod_three("1101").unwrap(), 1);
        assert_eq!(a.current_state(), ModThreeState::S2);
    }
}
