//! # insight-types
//!
//! Data model for the insight rule engine.
//!
//! ## Overview
//!
//! The engine takes a [`ContextSnapshot`] describing a user's recent
//! wellbeing signals and a list of declarative [`Rule`]s, and selects the
//! most relevant [`InsightMatch`] to surface. This crate holds the types
//! shared by the engine, the feedback companions and the CLI:
//!
//! - [`ContextSnapshot`]: aggregated, derived wellbeing state (all fields optional)
//! - [`FieldPath`]: closed set of dotted paths into the snapshot
//! - [`Condition`] / [`Operator`] / [`ConditionValue`]: a single comparison
//! - [`RuleSpec`]: authoring form of a rule, every optional field optional
//! - [`Rule`]: normalized rule with all defaults applied
//! - [`InsightMatch`]: engine output element, with optional [`ConditionTrace`]s
//! - [`FeedbackRecord`] / [`FeedbackIndex`]: user feedback consumed by suppression
//!
//! Tag normalization lives in [`tags`] so that snapshot construction and
//! `tags.contains` evaluation agree on what "the same tag" means.

#![deny(unsafe_code)]

pub mod context;
pub mod feedback;
pub mod field;
pub mod insight;
pub mod rule;
pub mod tags;

pub use context::{
    BehaviorSignals, ContextSnapshot, ContextSnapshotBuilder, DerivedFlags, MedicationSignals,
    MoodSignals, SleepDuration, SleepMidpoint, SleepSignals, StepSignals,
};
pub use feedback::{FeedbackIndex, FeedbackRecord, NOT_RELEVANT_NOW};
pub use field::{FieldPath, FieldValue};
pub use insight::{ConditionTrace, InsightMatch};
pub use rule::{Condition, ConditionValue, Operator, Rule, RuleSpec};
pub use tags::{normalize_tag, normalize_tags};
