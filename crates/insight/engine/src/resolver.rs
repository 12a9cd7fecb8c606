//! Field resolution
//!
//! Maps a [`FieldPath`] to the value the snapshot holds for it. A missing
//! section or leaf yields `None`; nothing is ever defaulted to zero.

use insight_types::{ContextSnapshot, FieldPath, FieldValue};

/// Resolve `field` against `context`.
///
/// `tags.contains` resolves to the whole tag collection (membership is
/// tested by the condition evaluator). `flags.stress` resolves to a native
/// boolean. An empty tag collection resolves to `None`.
pub fn resolve(context: &ContextSnapshot, field: &FieldPath) -> Option<FieldValue> {
    match field {
        FieldPath::MoodLast => number(context.mood.as_ref()?.last),
        FieldPath::MoodDelta => number(context.mood.as_ref()?.delta),
        FieldPath::MoodTrend3dPct => number(context.mood.as_ref()?.trend3d_pct),
        FieldPath::SleepLastNightHours => {
            number(context.sleep.as_ref()?.last_night.as_ref()?.hours)
        }
        FieldPath::SleepAvg7dHours => number(context.sleep.as_ref()?.avg7d.as_ref()?.hours),
        FieldPath::SleepMidpointDeltaMin => {
            number(context.sleep.as_ref()?.midpoint.as_ref()?.delta_min)
        }
        FieldPath::StepsLastDay => number(context.steps.as_ref()?.last_day),
        FieldPath::MedsAdherence7dPct => number(context.meds.as_ref()?.adherence7d_pct),
        FieldPath::BehaviorDaysSinceSocial => {
            number(context.behavior.as_ref()?.days_since_social)
        }
        FieldPath::TagsContains => {
            if context.tags.is_empty() {
                None
            } else {
                Some(FieldValue::Tags(context.tags.iter().cloned().collect()))
            }
        }
        FieldPath::FlagsStress => context.flags.as_ref()?.stress.map(FieldValue::Bool),
        FieldPath::Unknown(_) => None,
    }
}

fn number(value: Option<f64>) -> Option<FieldValue> {
    value.map(FieldValue::Number)
}
