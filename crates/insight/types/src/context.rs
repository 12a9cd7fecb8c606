//! Context snapshot
//!
//! The snapshot is the engine's only input about the user. It carries
//! aggregated, derived values only (baselines, deltas, averages, flags),
//! never raw per-record rows, and no timestamps or generated ids, so that
//! identical wellbeing states serialize to identical cache keys.
//!
//! Every field is optional. A missing value means "unknown", never zero.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::tags::normalize_tags;

/// Aggregated wellbeing state handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodSignals>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepSignals>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepSignals>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meds: Option<MedicationSignals>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<BehaviorSignals>,

    /// Tags from the most recent mood entry, normalized on the way in.
    #[serde(
        default,
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "deserialize_tags"
    )]
    pub tags: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<DerivedFlags>,
}

impl ContextSnapshot {
    /// Start building a snapshot.
    pub fn builder() -> ContextSnapshotBuilder {
        ContextSnapshotBuilder::default()
    }

    /// True when the snapshot carries no signal at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Mood signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSignals {
    /// Last mood rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<f64>,

    /// Last rating minus the rolling baseline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,

    /// Three-day trend, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend3d_pct: Option<f64>,
}

/// Sleep signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_night: Option<SleepDuration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg7d: Option<SleepDuration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midpoint: Option<SleepMidpoint>,
}

/// A sleep duration in hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepDuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

/// Circadian midpoint shift against the user's usual midpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMidpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_min: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSignals {
    /// Step count for the last full day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_day: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationSignals {
    /// Seven-day adherence, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adherence7d_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSignals {
    /// Days since the last entry tagged "social"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_since_social: Option<f64>,
}

/// Boolean flags derived by the context builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedFlags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<bool>,
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(normalize_tags(raw.unwrap_or_default()))
}

/// Builder for [`ContextSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct ContextSnapshotBuilder {
    snapshot: ContextSnapshot,
}

impl ContextSnapshotBuilder {
    pub fn mood_last(mut self, value: f64) -> Self {
        self.mood().last = Some(value);
        self
    }

    pub fn mood_delta(mut self, value: f64) -> Self {
        self.mood().delta = Some(value);
        self
    }

    pub fn mood_trend_3d_pct(mut self, value: f64) -> Self {
        self.mood().trend3d_pct = Some(value);
        self
    }

    pub fn sleep_last_night_hours(mut self, hours: f64) -> Self {
        self.sleep().last_night = Some(SleepDuration { hours: Some(hours) });
        self
    }

    pub fn sleep_avg_7d_hours(mut self, hours: f64) -> Self {
        self.sleep().avg7d = Some(SleepDuration { hours: Some(hours) });
        self
    }

    pub fn sleep_midpoint_delta_min(mut self, minutes: f64) -> Self {
        self.sleep().midpoint = Some(SleepMidpoint {
            delta_min: Some(minutes),
        });
        self
    }

    pub fn steps_last_day(mut self, steps: f64) -> Self {
        self.snapshot.steps = Some(StepSignals {
            last_day: Some(steps),
        });
        self
    }

    pub fn meds_adherence_7d_pct(mut self, pct: f64) -> Self {
        self.snapshot.meds = Some(MedicationSignals {
            adherence7d_pct: Some(pct),
        });
        self
    }

    pub fn days_since_social(mut self, days: f64) -> Self {
        self.snapshot.behavior = Some(BehaviorSignals {
            days_since_social: Some(days),
        });
        self
    }

    /// Add a tag. Tags that normalize to nothing are ignored.
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.snapshot.tags.extend(normalize_tags([tag]));
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.snapshot.tags.extend(normalize_tags(tags));
        self
    }

    pub fn stress(mut self, stress: bool) -> Self {
        self.snapshot.flags = Some(DerivedFlags {
            stress: Some(stress),
        });
        self
    }

    pub fn build(self) -> ContextSnapshot {
        self.snapshot
    }

    fn mood(&mut self) -> &mut MoodSignals {
        self.snapshot.mood.get_or_insert_with(MoodSignals::default)
    }

    fn sleep(&mut self) -> &mut SleepSignals {
        self.snapshot.sleep.get_or_insert_with(SleepSignals::default)
    }
}
