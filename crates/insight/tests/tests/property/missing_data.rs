//! Property tests: absence of data never matches.
//!
//! For every known field and every operator, a condition against a snapshot
//! that lacks the field is unsatisfied.

use insight_engine::{EvaluateOptions, InsightEngine, Matcher, RuleMatcher, RuleSet};
use insight_types::{Condition, ConditionValue, ContextSnapshot, FieldPath, Operator, Rule};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Lt),
        Just(Operator::Lte),
        Just(Operator::Gt),
        Just(Operator::Gte),
        Just(Operator::Eq),
        Just(Operator::DeltaLt),
        Just(Operator::DeltaGt),
        Just(Operator::PctLt),
        Just(Operator::PctGt),
    ]
}

fn arb_field() -> impl Strategy<Value = FieldPath> {
    prop::sample::select(FieldPath::KNOWN.to_vec())
}

fn arb_value() -> impl Strategy<Value = ConditionValue> {
    prop_oneof![
        (-1e6f64..1e6).prop_map(ConditionValue::Number),
        any::<bool>().prop_map(ConditionValue::Bool),
        "#?[a-z]{0,8}".prop_map(ConditionValue::Text),
    ]
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    (arb_field(), arb_operator(), arb_value())
        .prop_map(|(field, op, value)| Condition::new(field, op, value))
}

/// A snapshot holding only fields other than `skip`.
fn snapshot_without(skip: &FieldPath) -> ContextSnapshot {
    let mut builder = ContextSnapshot::builder();
    for field in FieldPath::KNOWN.iter().filter(|f| *f != skip) {
        builder = match field {
            FieldPath::MoodLast => builder.mood_last(1.0),
            FieldPath::MoodDelta => builder.mood_delta(-1.0),
            FieldPath::MoodTrend3dPct => builder.mood_trend_3d_pct(-20.0),
            FieldPath::SleepLastNightHours => builder.sleep_last_night_hours(4.0),
            FieldPath::SleepAvg7dHours => builder.sleep_avg_7d_hours(5.0),
            FieldPath::SleepMidpointDeltaMin => builder.sleep_midpoint_delta_min(90.0),
            FieldPath::StepsLastDay => builder.steps_last_day(100.0),
            FieldPath::MedsAdherence7dPct => builder.meds_adherence_7d_pct(40.0),
            FieldPath::BehaviorDaysSinceSocial => builder.days_since_social(9.0),
            FieldPath::TagsContains => builder.tag("work"),
            FieldPath::FlagsStress => builder.stress(true),
            FieldPath::Unknown(_) => builder,
        };
    }
    builder.build()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A condition on a missing field never holds.
    #[test]
    fn missing_field_never_matches(condition in arb_condition()) {
        let ctx = snapshot_without(&condition.field);
        let rule = Rule::new("r", "m").with_condition(condition);
        let outcome = RuleMatcher::default().match_rule(&rule, &ctx, true);

        prop_assert!(!outcome.is_match);
        let trace = outcome.trace.unwrap();
        prop_assert_eq!(trace.len(), 1);
        prop_assert!(trace[0].actual.is_none());
    }

    /// An empty snapshot matches no rule that has at least one condition.
    #[test]
    fn empty_snapshot_matches_no_conditional_rule(
        conditions in prop::collection::vec(arb_condition(), 1..5),
        priority in -10i32..10,
    ) {
        let rule = conditions
            .into_iter()
            .fold(Rule::new("r", "m").with_priority(priority), Rule::with_condition);
        let engine = InsightEngine::new(RuleSet::from_rules(vec![rule]).unwrap());
        prop_assert!(engine
            .evaluate_all(&ContextSnapshot::default(), &EvaluateOptions::new())
            .is_empty());
    }

    /// Unknown field paths behave like missing data.
    #[test]
    fn unknown_fields_never_match(
        path in "[a-z]{1,6}\\.[a-z]{1,6}",
        op in arb_operator(),
        value in arb_value(),
    ) {
        let field = FieldPath::from(path.as_str());
        prop_assume!(!field.is_known());

        let rule = Rule::new("r", "m").with_condition(Condition::new(field, op, value));
        let ctx = snapshot_without(&FieldPath::Unknown(String::new()));
        prop_assert!(!RuleMatcher::default().match_rule(&rule, &ctx, false).is_match);
    }
}
