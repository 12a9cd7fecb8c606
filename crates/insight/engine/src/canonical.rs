//! Stable stringify
//!
//! Canonical JSON text for cache keys: object keys sorted at every level,
//! no whitespace, `null` members dropped so that an absent field and an
//! explicit `null` produce the same key. The output does not depend on map
//! insertion order or on how `serde_json` is configured to store maps.
//!
//! JSON has no spelling for NaN or infinities and `serde_json` writes them
//! as `null`, which would give them the same key as a missing value. Input
//! holding a non-finite number therefore has no canonical form and is
//! rejected with [`InsightError::NonFiniteNumber`].

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;

use crate::error::{InsightError, Result};

/// Serialize `value` into its canonical form.
pub fn stable_stringify<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    reject_non_finite(value)?;
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    write_value(&value, &mut out)?;
    Ok(out)
}

/// `serde_yaml` keeps non-finite floats as numbers, so its value tree is
/// where they can still be found.
fn reject_non_finite<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    match non_finite_path(&serde_yaml::to_value(value)?) {
        Some(path) if path.is_empty() => Err(InsightError::NonFiniteNumber("$".into())),
        Some(path) => Err(InsightError::NonFiniteNumber(path)),
        None => Ok(()),
    }
}

/// Dotted path to the first non-finite number, empty for the root.
fn non_finite_path(value: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Number(n) if !n.is_finite() => Some(String::new()),
        Yaml::Sequence(items) => items.iter().enumerate().find_map(|(i, item)| {
            non_finite_path(item).map(|rest| join(&format!("[{i}]"), &rest))
        }),
        Yaml::Mapping(map) => map.iter().find_map(|(key, item)| {
            non_finite_path(item).map(|rest| {
                let key = key
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{key:?}"));
                join(&key, &rest)
            })
        }),
        Yaml::Tagged(tagged) => non_finite_path(&tagged.value),
        _ => None,
    }
}

fn join(head: &str, rest: &str) -> String {
    if rest.is_empty() || rest.starts_with('[') {
        format!("{head}{rest}")
    } else {
        format!("{head}.{rest}")
    }
}

fn write_value(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(s) => out.push_str(&serde_json::to_string(s)?),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> =
                map.iter().filter(|(_, v)| !v.is_null()).collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_value(item, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}
