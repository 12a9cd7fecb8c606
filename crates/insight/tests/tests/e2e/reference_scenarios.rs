//! End-to-end test: the reference rule set against representative snapshots.
//!
//! Verifies that:
//! - Low mood with a short night surfaces both sleep and trend insights, ranked
//! - A calm snapshot yields nothing
//! - Boolean flags and tags match through the whole pipeline
//! - Disabled rules never appear, even as catch-alls with top priority

use insight_engine::{EvaluateOptions, InsightEngine};
use insight_tests::{calm_context, low_context, sample_rules};
use insight_types::{ContextSnapshot, InsightMatch};

fn ids(matches: &[InsightMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn low_mood_and_short_sleep() {
    let engine = InsightEngine::new(sample_rules());
    let matches = engine.evaluate_all(&low_context(), &EvaluateOptions::new());

    assert_eq!(ids(&matches), ["low-mood-sleep-debt", "dopamine-dip"]);
    assert_eq!(matches[0].matched_conditions.len(), 2);
    assert_eq!(matches[0].action.as_deref(), Some("plan-early-night"));
    assert_eq!(
        engine
            .evaluate_one(&low_context(), &EvaluateOptions::new())
            .map(|m| m.id),
        Some("low-mood-sleep-debt".to_string())
    );
}

#[test]
fn calm_snapshot_matches_nothing() {
    let engine = InsightEngine::new(sample_rules());
    assert!(engine
        .evaluate_all(&calm_context(), &EvaluateOptions::new())
        .is_empty());
    assert!(engine
        .evaluate_one(&calm_context(), &EvaluateOptions::new())
        .is_none());
}

#[test]
fn empty_snapshot_matches_nothing() {
    let engine = InsightEngine::new(sample_rules());
    assert!(engine
        .evaluate_all(&ContextSnapshot::default(), &EvaluateOptions::new())
        .is_empty());
}

#[test]
fn stress_flag_and_tag_from_json() {
    let ctx: ContextSnapshot =
        serde_json::from_str(r#"{"flags":{"stress":true},"tags":["  #Work ","family"]}"#).unwrap();
    let engine = InsightEngine::new(sample_rules());
    let matches = engine.evaluate_all(&ctx, &EvaluateOptions::new());
    assert_eq!(ids(&matches), ["stressed-and-tagged"]);

    let relaxed: ContextSnapshot =
        serde_json::from_str(r#"{"flags":{"stress":false},"tags":["work"]}"#).unwrap();
    assert!(engine
        .evaluate_all(&relaxed, &EvaluateOptions::new())
        .is_empty());
}

#[test]
fn all_conditions_must_hold() {
    let engine = InsightEngine::new(sample_rules());
    let lonely_but_improving = ContextSnapshot::builder()
        .days_since_social(6.0)
        .mood_delta(0.5)
        .build();
    assert!(engine
        .evaluate_all(&lonely_but_improving, &EvaluateOptions::new())
        .is_empty());

    let lonely_and_sliding = ContextSnapshot::builder()
        .days_since_social(6.0)
        .mood_delta(-0.5)
        .steps_last_day(1200.0)
        .build();
    let matches = engine.evaluate_all(&lonely_and_sliding, &EvaluateOptions::new());
    assert_eq!(ids(&matches), ["reach-out", "move-more"]);
}

#[test]
fn disabled_catch_all_never_fires() {
    let rules = sample_rules();
    let check_in = rules.get("check-in").unwrap();
    assert!(!check_in.enabled);
    assert!(check_in.conditions.is_empty());

    let engine = InsightEngine::new(rules);
    for ctx in [low_context(), calm_context(), ContextSnapshot::default()] {
        let matches = engine.evaluate_all(&ctx, &EvaluateOptions::new());
        assert!(matches.iter().all(|m| m.id != "check-in"));
    }
}

#[test]
fn explain_traces_every_condition() {
    let engine = InsightEngine::new(sample_rules());
    let best = engine
        .evaluate_one(&low_context(), &EvaluateOptions::new().explained())
        .unwrap();

    let trace = best.explain.unwrap();
    assert_eq!(trace.len(), 2);
    assert!(trace.iter().all(|t| t.matched && t.actual.is_some()));
    assert_eq!(trace[0].condition.field.as_str(), "mood.last");
}
