//! Interactive REPL.

use crate::commands::{classify, format_table, render};
use crate::config::{Config, OutputFormat};
use colored::Colorize;
use dfakit_modthree::{parse_bits, ModThree};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

const HELP_TEXT: &str = r#"
Available commands:
  help                  Show this help
  <bits>                Compute <bits> mod 3 (e.g. 1101)
  trace <bits>          Compute <bits> mod 3 and show every state visited
  step <bits>           Feed <bits> without resetting
  state                 Show the current state
  reset                 Return to the initial state
  table                 Show the transition table

  quit, exit            Exit the REPL
"#;

pub fn run(classifier: &mut ModThree, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "dfakit modulo-three REPL".bold().cyan());

    // Create readline editor
    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<(), DefaultHistory> = Editor::with_config(rl_config)?;

    // Load history
    let history_path = config.repl.history_path();
    let _ = rl.load_history(&history_path);

    println!("Type 'help' for available commands.\n");

    loop {
        let prompt = format!("{} ", config.repl.prompt.cyan());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match execute_repl_command(classifier, line, config.output.format) {
                    Ok(Some(output)) => println!("{}\n", output),
                    Ok(None) => break, // Exit command
                    Err(e) => println!("{}: {}\n", "Error".red(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                println!("{}: {:?}", "Error".red(), err);
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(&history_path) {
        tracing::warn!(
            "Failed to save history to {}: {}",
            history_path.display(),
            e
        );
    }

    Ok(())
}

fn execute_repl_command(
    classifier: &mut ModThree,
    line: &str,
    format: OutputFormat,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(Some(String::new()));
    }

    let cmd = parts[0].to_lowercase();
    let args = &parts[1..];

    match cmd.as_str() {
        "help" | "?" => Ok(Some(HELP_TEXT.to_string())),

        "quit" | "exit" | "q" => Ok(None),

        "table" | "t" => Ok(Some(format_table(
            classifier.automaton().definition().as_ref(),
        ))),

        "trace" => {
            if args.is_empty() {
                return Ok(Some("Usage: trace <bits>".to_string()));
            }
            let result = classify(classifier, args[0], true)?;
            Ok(Some(render(&[result], format)?))
        }

        "step" | "s" => {
            if args.is_empty() {
                return Ok(Some("Usage: step <bits>".to_string()));
            }
            for bit in parse_bits(args[0])? {
                classifier.step(bit)?;
            }
            Ok(Some(format_state(classifier)))
        }

        "state" => Ok(Some(format_state(classifier))),

        "reset" | "r" => {
            classifier.reset();
            Ok(Some(format_state(classifier)))
        }

        _ if parts.len() == 1 && parse_bits(parts[0]).is_ok() => {
            let result = classify(classifier, parts[0], false)?;
            Ok(Some(render(&[result], format)?))
        }

        _ => Ok(Some(format!(
            "Unknown command: {}. Type 'help' for help.",
            cmd
        ))),
    }
}

fn format_state(classifier: &ModThree) -> String {
    let state = classifier.current_state();
    format!(
        "State: {} (remainder {})",
        state.as_str().yellow(),
        state.remainder()
    )
}
