//! Evaluate command

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;
use insight_engine::{EngineConfig, EvaluateOptions, InsightEngine, RuleSet};
use insight_feedback::LatestFeedbackIndex;
use insight_types::{ContextSnapshot, InsightMatch};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::input::read_document;
use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Rule file (.json, .yaml or .yml)
    #[arg(short, long)]
    pub rules: PathBuf,

    /// Context snapshot file (.json, .yaml or .yml)
    #[arg(long)]
    pub context: PathBuf,

    /// Feedback export (JSON array of feedback records)
    #[arg(short, long)]
    pub feedback: Option<PathBuf>,

    /// Reference time for feedback cooldowns (RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_time)]
    pub now: Option<DateTime<Utc>>,

    /// Include a per-condition trace with each match
    #[arg(short, long)]
    pub explain: bool,

    /// Print every match instead of only the best one
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct MatchRow {
    rank: usize,
    id: String,
    priority: i32,
    message: String,
}

impl MatchRow {
    fn new(rank: usize, m: &InsightMatch) -> Self {
        Self {
            rank,
            id: m.id.clone(),
            priority: m.priority,
            message: m.message.clone(),
        }
    }
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

pub fn execute(args: EvaluateArgs, config: EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    let rule_set = RuleSet::from_path(&args.rules)
        .with_context(|| format!("failed to load rules from {}", args.rules.display()))?;
    let context: ContextSnapshot = read_document(&args.context)?;

    let feedback = args
        .feedback
        .as_deref()
        .map(|path| {
            LatestFeedbackIndex::from_path(path)
                .with_context(|| format!("failed to load feedback from {}", path.display()))
        })
        .transpose()?;

    let mut options = EvaluateOptions::new();
    if let Some(index) = &feedback {
        options = options.with_feedback(index);
    }
    if let Some(now) = args.now {
        options = options.at(now);
    }
    if args.explain {
        options = options.explained();
    }
    debug!(?options, rules = rule_set.len(), "Evaluating snapshot");

    let engine = InsightEngine::with_config(rule_set, config);
    let matches = if args.all {
        engine.evaluate_all(&context, &options)
    } else {
        engine.evaluate_one(&context, &options).into_iter().collect()
    };

    match format {
        OutputFormat::Text => {
            let rows = matches
                .iter()
                .enumerate()
                .map(|(i, m)| MatchRow::new(i + 1, m))
                .collect();
            output::print_output::<MatchRow>(rows, format)?;
            output::print_explanations(&matches);
            Ok(())
        }
        _ => output::print_single(&matches, format),
    }
}
