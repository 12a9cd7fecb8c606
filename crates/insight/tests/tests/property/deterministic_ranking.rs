//! Property tests: ranking is a deterministic total order.
//!
//! Whatever order rules are declared in, the engine returns the same list,
//! sorted by priority, then satisfied-condition count, then id.

use insight_engine::{EngineConfig, EvaluateOptions, InsightEngine, RuleSet};
use insight_tests::rule_with_conditions;
use insight_types::{ContextSnapshot, InsightMatch, Rule};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Rules with distinct ids, random priorities and 0..4 always-true conditions.
fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..12).prop_flat_map(|ids| {
        let n = ids.len();
        (
            Just(ids.into_iter().collect::<Vec<_>>()),
            prop::collection::vec((-5i32..5, 0usize..4), n),
        )
            .prop_map(|(ids, shapes)| {
                ids.iter()
                    .zip(shapes)
                    .map(|(id, (priority, n))| rule_with_conditions(id, priority, n))
                    .collect::<Vec<Rule>>()
            })
    })
}

fn ctx() -> ContextSnapshot {
    ContextSnapshot::builder().mood_last(5.0).build()
}

fn evaluate(rules: Vec<Rule>) -> Vec<InsightMatch> {
    let engine = InsightEngine::with_config(
        RuleSet::from_rules(rules).unwrap(),
        EngineConfig::default().without_cache(),
    );
    engine.evaluate_all(&ctx(), &EvaluateOptions::new())
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Adjacent matches are in non-increasing (priority, specificity) order,
    /// with ids ascending on full ties.
    #[test]
    fn output_is_sorted(rules in arb_rules()) {
        let matches = evaluate(rules);
        for pair in matches.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (a.priority, a.specificity());
            let key_b = (b.priority, b.specificity());
            prop_assert!(key_a >= key_b);
            if key_a == key_b {
                prop_assert!(a.id < b.id);
            }
        }
    }

    /// Reversing or rotating the declaration order changes nothing.
    #[test]
    fn declaration_order_is_irrelevant(rules in arb_rules(), rotate in 0usize..12) {
        let baseline = evaluate(rules.clone());

        let mut reversed = rules.clone();
        reversed.reverse();
        prop_assert_eq!(&evaluate(reversed), &baseline);

        let mut rotated = rules;
        let len = rotated.len();
        rotated.rotate_left(rotate % len);
        prop_assert_eq!(&evaluate(rotated), &baseline);
    }

    /// Repeated evaluation of the same snapshot returns the same list.
    #[test]
    fn repeated_evaluation_is_stable(rules in arb_rules()) {
        let engine = InsightEngine::new(RuleSet::from_rules(rules).unwrap());
        let first = engine.evaluate_all(&ctx(), &EvaluateOptions::new());
        for _ in 0..3 {
            prop_assert_eq!(&engine.evaluate_all(&ctx(), &EvaluateOptions::new()), &first);
        }
    }

    /// Every enabled rule here is satisfiable, so all of them match.
    #[test]
    fn every_satisfied_rule_appears_once(rules in arb_rules()) {
        let expected = rules.len();
        let matches = evaluate(rules);
        prop_assert_eq!(matches.len(), expected);
    }
}
