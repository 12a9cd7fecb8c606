//! Condition evaluation
//!
//! Absence of data never satisfies a condition, whatever the operator.
//! Insights must not fire on missing data.

use insight_types::{
    normalize_tag, Condition, ConditionValue, ContextSnapshot, FieldPath, FieldValue, Operator,
};

use crate::resolver::resolve;

/// Result of evaluating one condition.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionOutcome {
    pub matched: bool,
    /// The resolved value, kept for explanations.
    pub actual: Option<FieldValue>,
}

/// Evaluate `condition` against `context`.
///
/// `tolerance` is the absolute tolerance for numeric `eq`.
pub fn evaluate(condition: &Condition, context: &ContextSnapshot, tolerance: f64) -> ConditionOutcome {
    let actual = resolve(context, &condition.field);
    let matched = match (&condition.field, &actual) {
        (_, None) => false,
        (FieldPath::TagsContains, Some(FieldValue::Tags(tags))) => {
            contains_tag(tags, &condition.value)
        }
        (FieldPath::TagsContains, Some(_)) => false,
        (_, Some(value)) => compare(value, condition.operator, &condition.value, tolerance),
    };

    ConditionOutcome { matched, actual }
}

/// Single-tag membership after normalization. The operator is not consulted.
fn contains_tag(tags: &[String], expected: &ConditionValue) -> bool {
    let Some(needle) = expected.as_text().and_then(normalize_tag) else {
        return false;
    };
    tags.iter()
        .filter_map(|tag| normalize_tag(tag))
        .any(|tag| tag == needle)
}

fn compare(actual: &FieldValue, operator: Operator, expected: &ConditionValue, tolerance: f64) -> bool {
    if operator.base() == Operator::Eq {
        return equals(actual, expected, tolerance);
    }

    let (Some(a), Some(b)) = (actual.as_number(), expected.as_number()) else {
        return false;
    };

    match operator.base() {
        Operator::Lt => a < b,
        Operator::Lte => a <= b,
        Operator::Gt => a > b,
        Operator::Gte => a >= b,
        _ => false,
    }
}

fn equals(actual: &FieldValue, expected: &ConditionValue, tolerance: f64) -> bool {
    match (actual, expected) {
        (FieldValue::Bool(a), ConditionValue::Bool(b)) => a == b,
        (FieldValue::Tags(_), _) | (_, ConditionValue::Text(_)) => false,
        _ => match (actual.as_number(), expected.as_number()) {
            (Some(a), Some(b)) => (a - b).abs() <= tolerance,
            _ => false,
        },
    }
}
