//! Rule set loading
//!
//! Rules are loaded once and are immutable afterwards; a new rule set means
//! a new engine. Loading normalizes every [`RuleSpec`] into a [`Rule`] and
//! rejects duplicate ids, since the id is what feedback is keyed on.

use std::collections::HashSet;
use std::path::Path;

use insight_types::{Rule, RuleSpec};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{InsightError, Result};

/// Accepted document shapes: a bare list, or `{ rules: [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RuleDocument {
    List(Vec<RuleSpec>),
    Wrapped { rules: Vec<RuleSpec> },
}

impl RuleDocument {
    fn into_specs(self) -> Vec<RuleSpec> {
        match self {
            RuleDocument::List(specs) | RuleDocument::Wrapped { rules: specs } => specs,
        }
    }
}

/// Immutable, normalized set of rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Normalize authoring specs into a rule set.
    pub fn new(specs: Vec<RuleSpec>) -> Result<Self> {
        Self::from_rules(specs.into_iter().map(Rule::from).collect())
    }

    /// Build from already-normalized rules.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(rules.len());
            for rule in &rules {
                if !seen.insert(rule.id.as_str()) {
                    return Err(InsightError::DuplicateRuleId(rule.id.clone()));
                }
                for field in rule.unknown_fields() {
                    warn!(
                        rule = %rule.id,
                        field = %field,
                        "Rule references an unknown field and will never match"
                    );
                }
            }
        }

        debug!(rules = rules.len(), "Rule set loaded");
        Ok(Self { rules })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: RuleDocument = serde_json::from_str(json)?;
        Self::new(doc.into_specs())
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: RuleDocument = serde_yaml::from_str(yaml)?;
        Self::new(doc.into_specs())
    }

    /// Load a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json(&contents),
            "yaml" | "yml" => Self::from_yaml(&contents),
            other => Err(InsightError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules that take part in matching.
    pub fn enabled(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|rule| rule.enabled)
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
