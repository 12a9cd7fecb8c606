//! Property tests: canonical serialization is insensitive to key order.
//!
//! The engine keys its cache on this string, so equal snapshots must
//! produce equal keys however their JSON was written.

use insight_engine::stable_stringify;
use proptest::prelude::*;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        "[a-z \"\\\\]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Rebuild every object with its keys inserted in reverse order.
fn reverse_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut reversed = Map::new();
            for (k, v) in map.iter().rev() {
                reversed.insert(k.clone(), reverse_keys(v));
            }
            Value::Object(reversed)
        }
        Value::Array(items) => Value::Array(items.iter().map(reverse_keys).collect()),
        other => other.clone(),
    }
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Key insertion order never changes the canonical string.
    #[test]
    fn key_order_is_irrelevant(value in arb_json()) {
        prop_assert_eq!(
            stable_stringify(&value).unwrap(),
            stable_stringify(&reverse_keys(&value)).unwrap()
        );
    }

    /// The canonical string is itself valid JSON.
    #[test]
    fn output_parses_back(value in arb_json()) {
        let text = stable_stringify(&value).unwrap();
        prop_assert!(serde_json::from_str::<Value>(&text).is_ok());
    }

    /// Different scalar values never collide.
    #[test]
    fn distinct_numbers_give_distinct_keys(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assume!(a != b);
        prop_assert_ne!(
            stable_stringify(&serde_json::json!({ "v": a })).unwrap(),
            stable_stringify(&serde_json::json!({ "v": b })).unwrap()
        );
    }
}
