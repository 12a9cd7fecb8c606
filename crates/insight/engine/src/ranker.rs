//! Ranking of matched rules.
//!
//! Total order: priority descending, then specificity (condition count)
//! descending, then id ascending. Rule ids are unique within a rule set, so
//! no two matches ever tie.

use std::cmp::Ordering;

use insight_types::{InsightMatch, Rule};

/// What ranking looks at: `(priority, specificity, id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey<'a> {
    pub priority: i32,
    pub specificity: usize,
    pub id: &'a str,
}

impl RankKey<'_> {
    /// Best first: priority descending, specificity descending, id ascending.
    pub fn best_first(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.specificity.cmp(&self.specificity))
            .then_with(|| self.id.cmp(other.id))
    }
}

impl<'a> From<&'a InsightMatch> for RankKey<'a> {
    fn from(m: &'a InsightMatch) -> Self {
        Self {
            priority: m.priority,
            specificity: m.specificity(),
            id: &m.id,
        }
    }
}

/// A rule ranks as it would if every condition held.
impl<'a> From<&'a Rule> for RankKey<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            priority: rule.priority,
            specificity: rule.specificity(),
            id: &rule.id,
        }
    }
}

/// Order two matches best-first.
pub fn compare(a: &InsightMatch, b: &InsightMatch) -> Ordering {
    RankKey::from(a).best_first(&RankKey::from(b))
}

/// Order two rules the way their matches would rank.
pub fn compare_rules(a: &Rule, b: &Rule) -> Ordering {
    RankKey::from(a).best_first(&RankKey::from(b))
}

/// Sort matches best-first in place.
pub fn rank(matches: &mut [InsightMatch]) {
    matches.sort_by(compare);
}
