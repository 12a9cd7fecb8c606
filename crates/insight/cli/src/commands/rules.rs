//! Rules command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use insight_engine::{ranker::compare_rules, RuleSet};
use insight_types::Rule;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, print_warning, OutputFormat};

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule file (.json, .yaml or .yml)
    #[arg(short, long)]
    pub rules: PathBuf,

    /// Only list enabled rules
    #[arg(long)]
    pub enabled: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct RuleRow {
    id: String,
    priority: i32,
    conditions: usize,
    status: String,
}

impl From<&Rule> for RuleRow {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id.clone(),
            priority: rule.priority,
            conditions: rule.specificity(),
            status: if rule.enabled { "enabled" } else { "disabled" }.to_string(),
        }
    }
}

pub fn execute(args: RulesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let rule_set = RuleSet::from_path(&args.rules)
        .with_context(|| format!("failed to load rules from {}", args.rules.display()))?;

    let mut rules: Vec<&Rule> = if args.enabled {
        rule_set.enabled().collect()
    } else {
        rule_set.rules().iter().collect()
    };
    rules.sort_by(|a, b| compare_rules(a, b));

    for rule in &rules {
        for field in rule.unknown_fields() {
            print_warning(&format!("{}: unknown field '{}' never matches", rule.id, field));
        }
    }

    match format {
        OutputFormat::Text => {
            let rows = rules.into_iter().map(RuleRow::from).collect::<Vec<_>>();
            output::print_output(rows, format)
        }
        _ => output::print_single(&rules, format),
    }
}
