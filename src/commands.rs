//! Command execution.

use crate::config::OutputFormat;
use crate::Commands;
use colored::Colorize;
use dfakit_core::{Definition, Label};
use dfakit_modthree::{ModThree, ModThreeError, ModThreeState};
use serde::Serialize;

/// Result of classifying one input.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub input: String,
    pub remainder: u8,
    pub final_state: ModThreeState,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<ModThreeState>>,
}

/// Executes a command and returns the formatted output.
pub fn execute(
    classifier: &mut ModThree,
    cmd: Commands,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        Commands::Repl => unreachable!(),

        Commands::ModThree { inputs, trace } => {
            let results = inputs
                .iter()
                .map(|input| classify(classifier, input, trace))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(render(&results, format)?)
        }

        Commands::Table => Ok(format_table(
            classifier.automaton().definition().as_ref(),
        )),
    }
}

/// Classifies a single binary string.
pub fn classify(
    classifier: &mut ModThree,
    input: &str,
    with_trace: bool,
) -> Result<Classification, ModThreeError> {
    let (final_state, trace) = if with_trace {
        let visited = classifier.trace(input)?;
        (classifier.current_state(), Some(visited))
    } else {
        (classifier.classify(input)?, None)
    };

    Ok(Classification {
        input: input.to_string(),
        remainder: final_state.remainder(),
        final_state,
        accepted: classifier.is_accepted(),
        trace,
    })
}

/// Renders classifications; JSON output is always an array.
pub fn render(
    results: &[Classification],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(results),
        OutputFormat::Text => Ok(results
            .iter()
            .map(format_classification)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn format_classification(c: &Classification) -> String {
    let input = if c.input.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        c.input.cyan().to_string()
    };

    let mut line = format!(
        "{} mod 3 = {} (state: {}{})",
        input,
        c.remainder.to_string().green().bold(),
        c.final_state.as_str().yellow(),
        if c.accepted { ", accepted" } else { "" }
    );

    if let Some(trace) = &c.trace {
        let path: Vec<&str> = trace.iter().map(|s| s.as_str()).collect();
        line.push_str(&format!("\n  trace: {}", path.join(" -> ")));
    }

    line
}

/// Formats a transition table, one row per (state, symbol) pair.
///
/// `>` marks the initial state, `*` marks accepting states, `-` an
/// undefined transition.
pub fn format_table<S: Label, A: Label>(definition: &Definition<S, A>) -> String {
    let mut output = format!("{}\n", "Transitions".bold());

    for state in definition.states() {
        let initial = if state == definition.initial_state() {
            ">"
        } else {
            " "
        };
        let accepting = if definition.is_final_state(state) {
            "*"
        } else {
            " "
        };

        for symbol in definition.alphabet() {
            let target = definition
                .get_transition(state, symbol)
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "{}{} {} --{}--> {}\n",
                initial, accepting, state, symbol, target
            ));
        }
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ModThree {
        ModThree::new().unwrap()
    }

    #[test]
    fn test_classify() {
        let mut fsm = classifier();
        let result = classify(&mut fsm, "1101", false).unwrap();

        assert_eq!(result.remainder, 1);
        assert_eq!(result.final_state, ModThreeState::S1);
        assert!(result.accepted);
        assert!(result.trace.is_none());
    }

    #[test]
    fn test_classify_with_trace() {
        let mut fsm = classifier();
        let result = classify(&mut fsm, "10", true).unwrap();

        assert_eq!(result.remainder, 2);
        assert_eq!(
            result.trace,
            Some(vec![ModThreeState::S0, ModThreeState::S1, ModThreeState::S2])
        );
    }

    #[test]
    fn test_classify_rejects_non_binary() {
        let mut fsm = classifier();
        let result = classify(&mut fsm, "10a1", false);
        assert!(matches!(result, Err(ModThreeError::InvalidInput { .. })));
    }

    #[test]
    fn test_render_json() {
        let mut fsm = classifier();
        let results = vec![
            classify(&mut fsm, "1110", false).unwrap(),
            classify(&mut fsm, "", true).unwrap(),
        ];

        let json = render(&results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["input"], "1110");
        assert_eq!(value[0]["remainder"], 2);
        assert_eq!(value[0]["final_state"], "S2");
        assert!(value[0].get("trace").is_none());
        assert_eq!(value[1]["remainder"], 0);
        assert_eq!(value[1]["trace"], serde_json::json!(["S0"]));
    }

    #[test]
    fn test_render_text() {
        let mut fsm = classifier();
        let results = vec![classify(&mut fsm, "111", true).unwrap()];

        let text = render(&results, OutputFormat::Text).unwrap();
        assert!(text.contains("111"));
        assert!(text.contains("S1"));
        assert!(text.contains("trace: S0 -> S1 -> S0 -> S1"));
    }

    #[test]
    fn test_format_table() {
        let fsm = classifier();
        let table = format_table(fsm.automaton().definition().as_ref());

        assert!(table.contains(">* S0 --0--> S0"));
        assert!(table.contains(" * S1 --0--> S2"));
        assert!(table.contains(" * S2 --1--> S2"));
        assert_eq!(table.lines().count(), 7);
    }
}
