//! Feedback suppression
//!
//! Removes matches the user recently marked as not helpful. Positive
//! feedback has no effect on ordering or visibility. The filter is a pure
//! function of the matches, the feedback snapshot and `now`; recording
//! feedback is the caller's job.

use chrono::{DateTime, Duration, Utc};
use insight_types::{FeedbackIndex, FeedbackRecord, InsightMatch};
use tracing::debug;

use crate::config::SuppressionPolicy;

/// Cooldown that applies to a record, or `None` if it never suppresses.
pub fn cooldown_for(record: &FeedbackRecord, policy: &SuppressionPolicy) -> Option<Duration> {
    if record.helpful {
        return None;
    }
    if record.is_not_relevant_now() {
        Some(policy.short_cooldown())
    } else {
        Some(policy.long_cooldown())
    }
}

/// Whether `record` suppresses its insight at `now`.
///
/// Future-dated records (clock skew) fail open.
pub fn is_suppressed(record: &FeedbackRecord, now: DateTime<Utc>, policy: &SuppressionPolicy) -> bool {
    let Some(cooldown) = cooldown_for(record, policy) else {
        return false;
    };
    let elapsed = now.signed_duration_since(record.created_at);
    if elapsed < Duration::zero() {
        return false;
    }
    elapsed < cooldown
}

/// Drop suppressed matches, keeping the order of the rest.
pub fn suppress(
    matches: &[InsightMatch],
    feedback: &dyn FeedbackIndex,
    now: DateTime<Utc>,
    policy: &SuppressionPolicy,
) -> Vec<InsightMatch> {
    matches
        .iter()
        .filter(|m| match feedback.latest(&m.id) {
            Some(record) if is_suppressed(&record, now, policy) => {
                debug!(
                    insight = %m.id,
                    reason = record.reason.as_deref().unwrap_or("unspecified"),
                    elapsed_secs = now.signed_duration_since(record.created_at).num_seconds(),
                    "Insight suppressed by feedback"
                );
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}
