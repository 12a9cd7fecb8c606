//! Rules and conditions
//!
//! Rules are authored as [`RuleSpec`] (a static list or a server-delivered
//! document) and normalized into [`Rule`] once, when the rule set is loaded.
//! Matching only ever sees the normalized form, so defaults are applied in
//! exactly one place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldPath;

/// Comparison operator.
///
/// `delta*` and `pct*` exist so rule authors can say "this is a change or a
/// percentage". They compare exactly like their base operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    DeltaLt,
    DeltaGt,
    PctLt,
    PctGt,
}

impl Operator {
    /// The operator used at evaluation time.
    pub fn base(self) -> Operator {
        match self {
            Operator::DeltaLt | Operator::PctLt => Operator::Lt,
            Operator::DeltaGt | Operator::PctGt => Operator::Gt,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Eq => "eq",
            Operator::DeltaLt => "deltaLt",
            Operator::DeltaGt => "deltaGt",
            Operator::PctLt => "pctLt",
            Operator::PctGt => "pctGt",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ConditionValue {
    /// Numeric view. Booleans coerce to `1.0` / `0.0`; text never does.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for ConditionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ConditionValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// A single comparison against one field of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: FieldPath,
    #[serde(alias = "op")]
    pub operator: Operator,
    pub value: ConditionValue,
}

impl Condition {
    pub fn new(
        field: impl Into<FieldPath>,
        operator: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// `tags.contains <tag>`
    pub fn has_tag(tag: impl Into<String>) -> Self {
        Self::new(FieldPath::TagsContains, Operator::Eq, tag.into())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// Authoring form of a rule. Only `id` and `message` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Normalized rule with every default applied.
///
/// `id` is the stable identity used for feedback lookups and must never be
/// reused for a semantically different rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    /// Higher wins. Defaults to 0.
    pub priority: i32,
    /// All must hold. Empty matches every context.
    pub conditions: Vec<Condition>,
    pub message: String,
    pub action: Option<String>,
    pub why: Option<String>,
    pub icon: Option<String>,
    pub source_tag: Option<String>,
    /// Disabled rules never match. Defaults to true.
    pub enabled: bool,
}

impl Rule {
    /// Create an enabled rule with priority 0 and no conditions.
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            priority: 0,
            conditions: Vec::new(),
            message: message.into(),
            action: None,
            why: None,
            icon: None,
            source_tag: None,
            enabled: true,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_why(mut self, why: impl Into<String>) -> Self {
        self.why = Some(why.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = Some(tag.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Number of simultaneous conditions. Secondary ranking key.
    pub fn specificity(&self) -> usize {
        self.conditions.len()
    }

    /// Paths this rule references that the engine cannot resolve.
    pub fn unknown_fields(&self) -> impl Iterator<Item = &FieldPath> {
        self.conditions
            .iter()
            .map(|c| &c.field)
            .filter(|f| !f.is_known())
    }
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        Self {
            id: spec.id,
            priority: spec.priority.unwrap_or(0),
            conditions: spec.conditions.unwrap_or_default(),
            message: spec.message,
            action: spec.action,
            why: spec.why,
            icon: spec.icon,
            source_tag: spec.source_tag,
            enabled: spec.enabled.unwrap_or(true),
        }
    }
}
