//! Field paths and resolved field values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dotted path into a [`ContextSnapshot`](crate::ContextSnapshot).
///
/// The set is closed: adding a field means adding a variant here and a
/// resolution arm in the engine, which the compiler checks. Paths that are
/// not recognized when rules are loaded are kept as [`FieldPath::Unknown`]
/// and never resolve to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldPath {
    MoodLast,
    MoodDelta,
    MoodTrend3dPct,
    SleepLastNightHours,
    SleepAvg7dHours,
    SleepMidpointDeltaMin,
    StepsLastDay,
    MedsAdherence7dPct,
    BehaviorDaysSinceSocial,
    TagsContains,
    FlagsStress,
    Unknown(String),
}

impl FieldPath {
    /// Every known path, in declaration order.
    pub const KNOWN: [FieldPath; 11] = [
        FieldPath::MoodLast,
        FieldPath::MoodDelta,
        FieldPath::MoodTrend3dPct,
        FieldPath::SleepLastNightHours,
        FieldPath::SleepAvg7dHours,
        FieldPath::SleepMidpointDeltaMin,
        FieldPath::StepsLastDay,
        FieldPath::MedsAdherence7dPct,
        FieldPath::BehaviorDaysSinceSocial,
        FieldPath::TagsContains,
        FieldPath::FlagsStress,
    ];

    /// Parse a dotted path. Unrecognized paths become [`FieldPath::Unknown`].
    pub fn parse(path: &str) -> Self {
        match path.trim() {
            "mood.last" => Self::MoodLast,
            "mood.delta" => Self::MoodDelta,
            "mood.trend3dPct" => Self::MoodTrend3dPct,
            "sleep.lastNight.hours" => Self::SleepLastNightHours,
            "sleep.avg7d.hours" => Self::SleepAvg7dHours,
            "sleep.midpoint.deltaMin" => Self::SleepMidpointDeltaMin,
            "steps.lastDay" => Self::StepsLastDay,
            "meds.adherence7dPct" => Self::MedsAdherence7dPct,
            "behavior.daysSinceSocial" => Self::BehaviorDaysSinceSocial,
            "tags.contains" => Self::TagsContains,
            "flags.stress" => Self::FlagsStress,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::MoodLast => "mood.last",
            Self::MoodDelta => "mood.delta",
            Self::MoodTrend3dPct => "mood.trend3dPct",
            Self::SleepLastNightHours => "sleep.lastNight.hours",
            Self::SleepAvg7dHours => "sleep.avg7d.hours",
            Self::SleepMidpointDeltaMin => "sleep.midpoint.deltaMin",
            Self::StepsLastDay => "steps.lastDay",
            Self::MedsAdherence7dPct => "meds.adherence7dPct",
            Self::BehaviorDaysSinceSocial => "behavior.daysSinceSocial",
            Self::TagsContains => "tags.contains",
            Self::FlagsStress => "flags.stress",
            Self::Unknown(path) => path,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.as_str().to_string()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value resolved from the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Bool(bool),
    /// The whole tag collection, for `tags.contains`.
    Tags(Vec<String>),
}

impl FieldValue {
    /// Numeric view of the value. Booleans coerce to `1.0` / `0.0`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Tags(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Tags(tags) => write!(f, "[{}]", tags.join(", ")),
        }
    }
}
