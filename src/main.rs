//! dfakit - deterministic finite automaton toolkit
//!
//! Classifies binary strings modulo three, either one-shot or from an
//! interactive REPL.

mod commands;
mod config;
mod repl;

use clap::{Parser, Subcommand};
use colored::Colorize;
use config::{Config, OutputFormat};
use dfakit_modthree::ModThree;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dfakit")]
#[command(about = "Deterministic finite automaton toolkit: binary modulo-three classifier")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "DFAKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start interactive REPL
    Repl,

    /// Compute the remainder of binary numbers divided by three
    ModThree {
        /// Binary strings, most significant bit first
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Also print every state visited
        #[arg(short, long)]
        trace: bool,
    },

    /// Print the modulo-three transition table (text only)
    Table,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration (file, then env overrides, then flags)
    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            std::process::exit(1);
        }
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let mut classifier = ModThree::new()?;

    match cli.command {
        Some(Commands::Repl) | None => {
            repl::run(&mut classifier, &config)?;
        }
        Some(cmd) => match commands::execute(&mut classifier, cmd, config.output.format) {
            Ok(output) => {
                println!("{}", output);
            }
            Err(e) => {
                eprintln!("{}: {}", "Error".red(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
