//! Insight CLI
//!
//! Evaluates a rule file against a context snapshot from the terminal:
//! - Evaluate a snapshot, optionally with a feedback export
//! - List the normalized rule set
//! - Show the effective engine configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod input;
mod output;

use commands::{evaluate, rules};
use insight_engine::EngineConfig;

/// Insight CLI application
#[derive(Parser)]
#[command(name = "insight")]
#[command(about = "Evaluate wellbeing insight rules against a context snapshot", long_about = None)]
#[command(version)]
struct Cli {
    /// Engine configuration file (YAML)
    #[arg(short, long, env = "INSIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a context snapshot against a rule file
    Evaluate(evaluate::EvaluateArgs),

    /// List the rules in a rule file
    Rules(rules::RulesArgs),

    /// Show the effective engine configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = EngineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(args, config, cli.output),
        Commands::Rules(args) => rules::execute(args, cli.output),
        Commands::Config => output::print_single(&config, cli.output),
    }
}
