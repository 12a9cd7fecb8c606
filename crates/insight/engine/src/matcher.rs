//! Rule matching
//!
//! A rule matches when every condition holds. An empty condition list is a
//! catch-all and always matches.

use insight_types::{Condition, ConditionTrace, ContextSnapshot, Rule};

use crate::condition::evaluate;
use crate::config::DEFAULT_EQ_TOLERANCE;

/// Outcome of matching one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub is_match: bool,
    /// Conditions that held, in rule order.
    pub satisfied_conditions: Vec<Condition>,
    /// Per-condition trace, present when explanations were requested.
    pub trace: Option<Vec<ConditionTrace>>,
}

/// Matches a rule against a context.
///
/// The engine calls this once per enabled rule on a cache miss. Wrapping
/// it is the supported way to observe or instrument matching.
pub trait Matcher: Send + Sync {
    fn match_rule(&self, rule: &Rule, context: &ContextSnapshot, explain: bool) -> RuleOutcome;
}

/// Default AND matcher.
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    eq_tolerance: f64,
}

impl RuleMatcher {
    pub fn new(eq_tolerance: f64) -> Self {
        Self { eq_tolerance }
    }
}

impl Default for RuleMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_EQ_TOLERANCE)
    }
}

impl Matcher for RuleMatcher {
    fn match_rule(&self, rule: &Rule, context: &ContextSnapshot, explain: bool) -> RuleOutcome {
        let mut satisfied = Vec::with_capacity(rule.conditions.len());
        let mut trace = explain.then(|| Vec::with_capacity(rule.conditions.len()));
        let mut is_match = true;

        for condition in &rule.conditions {
            let outcome = evaluate(condition, context, self.eq_tolerance);
            if outcome.matched {
                satisfied.push(condition.clone());
            } else {
                is_match = false;
            }

            if let Some(trace) = trace.as_mut() {
                trace.push(ConditionTrace {
                    condition: condition.clone(),
                    actual: outcome.actual,
                    matched: outcome.matched,
                });
            } else if !is_match {
                break;
            }
        }

        RuleOutcome {
            is_match,
            satisfied_conditions: satisfied,
            trace,
        }
    }
}

impl<M: Matcher + ?Sized> Matcher for std::sync::Arc<M> {
    fn match_rule(&self, rule: &Rule, context: &ContextSnapshot, explain: bool) -> RuleOutcome {
        (**self).match_rule(rule, context, explain)
    }
}
