//! Shared fixtures for the insight end-to-end and property suites.

use chrono::{DateTime, TimeZone, Utc};
use insight_engine::RuleSet;
use insight_types::{Condition, ContextSnapshot, Operator, Rule};

/// The reference rule set used across the suites.
pub const RULES_JSON: &str = r#"[
  {
    "id": "low-mood-sleep-debt",
    "priority": 5,
    "conditions": [
      { "field": "mood.last", "operator": "lt", "value": 3 },
      { "field": "sleep.lastNight.hours", "operator": "lt", "value": 6 }
    ],
    "message": "Low mood after a short night. Go easy on yourself today.",
    "action": "plan-early-night"
  },
  {
    "id": "dopamine-dip",
    "priority": 4,
    "conditions": [
      { "field": "mood.trend3dPct", "operator": "pctLt", "value": -10 }
    ],
    "message": "Your mood has been sliding for a few days."
  },
  {
    "id": "stressed-and-tagged",
    "priority": 3,
    "conditions": [
      { "field": "flags.stress", "operator": "eq", "value": true },
      { "field": "tags.contains", "operator": "eq", "value": "work" }
    ],
    "message": "Work stress showing up in your notes."
  },
  {
    "id": "move-more",
    "priority": 2,
    "conditions": [
      { "field": "steps.lastDay", "operator": "lt", "value": 3000 }
    ],
    "message": "A short walk could help."
  },
  {
    "id": "reach-out",
    "priority": 2,
    "conditions": [
      { "field": "behavior.daysSinceSocial", "operator": "gte", "value": 5 },
      { "field": "mood.delta", "operator": "deltaLt", "value": 0 }
    ],
    "message": "It has been a while since you saw friends."
  },
  {
    "id": "check-in",
    "priority": 10,
    "message": "How are you feeling?",
    "enabled": false
  }
]"#;

pub fn sample_rules() -> RuleSet {
    RuleSet::from_json(RULES_JSON).expect("fixture rules are valid")
}

/// Low mood, short sleep and a falling three-day trend.
pub fn low_context() -> ContextSnapshot {
    ContextSnapshot::builder()
        .mood_last(2.5)
        .mood_trend_3d_pct(-12.0)
        .sleep_last_night_hours(5.5)
        .build()
}

/// Nothing in this snapshot should trigger the sample rules.
pub fn calm_context() -> ContextSnapshot {
    ContextSnapshot::builder()
        .mood_last(7.0)
        .sleep_last_night_hours(8.0)
        .build()
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0)
        .single()
        .expect("valid fixture time")
}

/// A rule with `n` conditions that every snapshot with `mood.last = 5` satisfies.
pub fn rule_with_conditions(id: &str, priority: i32, n: usize) -> Rule {
    (0..n).fold(Rule::new(id, id).with_priority(priority), |rule, _| {
        rule.with_condition(Condition::new("mood.last", Operator::Gte, 0.0))
    })
}
