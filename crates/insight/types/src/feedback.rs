//! User feedback on surfaced insights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reason recorded when the user dismisses an insight as not relevant
/// right now. Selects the short suppression cooldown.
pub const NOT_RELEVANT_NOW: &str = "not_relevant_now";

/// One piece of feedback about an insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub insight_id: String,
    pub created_at: DateTime<Utc>,
    pub helpful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FeedbackRecord {
    pub fn helpful(insight_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            insight_id: insight_id.into(),
            created_at,
            helpful: true,
            reason: None,
        }
    }

    pub fn not_helpful(insight_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            insight_id: insight_id.into(),
            created_at,
            helpful: false,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn is_not_relevant_now(&self) -> bool {
        self.reason.as_deref() == Some(NOT_RELEVANT_NOW)
    }
}

/// Latest-feedback lookup consumed by suppression.
///
/// How the index is built (a reduce over a feedback table, a remote
/// "latest by id" query) is up to the implementation. It must return the
/// single most recent record per insight id. Implementations that can fail
/// return `None` on failure: a missing record never suppresses.
pub trait FeedbackIndex: Send + Sync {
    fn latest(&self, insight_id: &str) -> Option<FeedbackRecord>;
}

impl<T: FeedbackIndex + ?Sized> FeedbackIndex for &T {
    fn latest(&self, insight_id: &str) -> Option<FeedbackRecord> {
        (**self).latest(insight_id)
    }
}

impl<T: FeedbackIndex + ?Sized> FeedbackIndex for std::sync::Arc<T> {
    fn latest(&self, insight_id: &str) -> Option<FeedbackRecord> {
        (**self).latest(insight_id)
    }
}
