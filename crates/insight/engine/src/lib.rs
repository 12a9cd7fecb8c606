//! # insight-engine
//!
//! Deterministic rule engine that picks the most relevant insight for a
//! user's current wellbeing snapshot.
//!
//! ## Pipeline
//!
//! ```text
//! ContextSnapshot ──► resolve ──► evaluate ──► match_rule ──► rank ──► suppress ──► Vec<InsightMatch>
//!                      field      condition    all-of         total     feedback
//!                                                              order     cooldown
//! ```
//!
//! - [`resolver::resolve`]: dotted field path to snapshot value
//! - [`condition::evaluate`]: one comparison, absent data never matches
//! - [`Matcher`] / [`RuleMatcher`]: all conditions of a rule must hold
//! - [`ranker::rank`]: priority desc, specificity desc, id asc
//! - [`suppress::suppress`]: drops insights the user recently dismissed
//! - [`InsightEngine`]: composes the above and memoizes the latest result
//!   keyed by [`stable_stringify`] of the snapshot
//!
//! ## Example
//!
//! ```rust
//! use insight_engine::{EvaluateOptions, InsightEngine, RuleSet};
//! use insight_types::ContextSnapshot;
//!
//! let rules = RuleSet::from_yaml(r#"
//! - id: low-mood-sleep-debt
//!   priority: 5
//!   conditions:
//!     - { field: mood.last, operator: lt, value: 3 }
//!     - { field: sleep.lastNight.hours, operator: lt, value: 6 }
//!   message: Low mood after a short night.
//! "#).unwrap();
//!
//! let engine = InsightEngine::new(rules);
//! let ctx = ContextSnapshot::builder()
//!     .mood_last(2.5)
//!     .sleep_last_night_hours(5.5)
//!     .build();
//!
//! let best = engine.evaluate_one(&ctx, &EvaluateOptions::new()).unwrap();
//! assert_eq!(best.id, "low-mood-sleep-debt");
//! ```

#![deny(unsafe_code)]

pub mod cache;
pub mod canonical;
pub mod condition;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod ranker;
pub mod resolver;
pub mod rule_set;
pub mod suppress;

pub use cache::{CacheStats, EvaluationCache};
pub use canonical::stable_stringify;
pub use condition::ConditionOutcome;
pub use config::{EngineConfig, SuppressionPolicy};
pub use engine::{EvaluateOptions, InsightEngine};
pub use error::{InsightError, Result};
pub use matcher::{Matcher, RuleMatcher, RuleOutcome};
pub use rule_set::RuleSet;
