//! Engine output.

use serde::{Deserialize, Serialize};

use crate::field::FieldValue;
use crate::rule::{Condition, Rule};

/// Actual-vs-expected record for one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionTrace {
    pub condition: Condition,
    /// What the snapshot held. `None` when the field was unknown.
    #[serde(default)]
    pub actual: Option<FieldValue>,
    pub matched: bool,
}

/// A rule whose conditions all hold for a given snapshot.
///
/// Built fresh per evaluation and never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightMatch {
    pub id: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<String>,

    pub priority: i32,

    pub matched_conditions: Vec<Condition>,

    /// Present only when the caller asked for explanations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain: Option<Vec<ConditionTrace>>,
}

impl InsightMatch {
    /// Build a match from the rule that produced it.
    pub fn from_rule(
        rule: &Rule,
        matched_conditions: Vec<Condition>,
        explain: Option<Vec<ConditionTrace>>,
    ) -> Self {
        Self {
            id: rule.id.clone(),
            message: rule.message.clone(),
            action: rule.action.clone(),
            why: rule.why.clone(),
            icon: rule.icon.clone(),
            source_tag: rule.source_tag.clone(),
            priority: rule.priority,
            matched_conditions,
            explain,
        }
    }

    /// Specificity of the rule that produced this match.
    pub fn specificity(&self) -> usize {
        self.matched_conditions.len()
    }
}
