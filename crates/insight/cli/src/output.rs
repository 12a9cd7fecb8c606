//! Output formatting utilities

use colored::*;
use insight_types::InsightMatch;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print rows as a table, or serialize them.
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
            Ok(())
        }
        _ => print_single(&data, format),
    }
}

/// Print a single value. Text falls back to pretty JSON.
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// Print the per-condition trace of every explained match.
pub fn print_explanations(matches: &[InsightMatch]) {
    for m in matches {
        let Some(trace) = &m.explain else {
            continue;
        };
        println!("{}", m.id.bold());
        for step in trace {
            let mark = if step.matched { "✓".green() } else { "✗".red() };
            let actual = step
                .actual
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "unknown".into());
            println!("  {} {} (actual: {})", mark, step.condition, actual);
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
