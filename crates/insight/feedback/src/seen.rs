//! Seen store
//!
//! Remembers when an insight was last shown to a user on a screen, so the
//! UI can avoid showing the same card on every render. Entries older than
//! the retention window are pruned.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use insight_types::InsightMatch;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default retention window (24 hours).
pub const DEFAULT_RETENTION_SECS: i64 = 24 * 60 * 60;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeenStoreConfig {
    /// Entries older than this are dropped by [`SeenStore::prune`]
    pub retention_secs: i64,
}

impl Default for SeenStoreConfig {
    fn default() -> Self {
        Self {
            retention_secs: DEFAULT_RETENTION_SECS,
        }
    }
}

impl SeenStoreConfig {
    pub fn retention(&self) -> Duration {
        Duration::seconds(self.retention_secs)
    }
}

/// `(user, screen, insight)` key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeenKey {
    pub user_id: String,
    pub screen: String,
    pub insight_id: String,
}

impl SeenKey {
    pub fn new(
        user_id: impl Into<String>,
        screen: impl Into<String>,
        insight_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            screen: screen.into(),
            insight_id: insight_id.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SeenStore {
    config: SeenStoreConfig,
    entries: DashMap<SeenKey, DateTime<Utc>>,
}

impl SeenStore {
    pub fn new(config: SeenStoreConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    /// Record that the insight was shown at `at`. Keeps the later timestamp.
    pub fn mark_seen(&self, key: SeenKey, at: DateTime<Utc>) {
        self.entries
            .entry(key)
            .and_modify(|last| {
                if at > *last {
                    *last = at;
                }
            })
            .or_insert(at);
    }

    pub fn last_seen(&self, key: &SeenKey) -> Option<DateTime<Utc>> {
        self.entries.get(key).map(|at| *at)
    }

    /// Whether the insight was shown within `window` before `now`.
    /// A future timestamp does not count as seen.
    pub fn seen_within(&self, key: &SeenKey, window: Duration, now: DateTime<Utc>) -> bool {
        match self.last_seen(key) {
            Some(at) => {
                let elapsed = now.signed_duration_since(at);
                elapsed >= Duration::zero() && elapsed < window
            }
            None => false,
        }
    }

    /// Keep only matches not shown to `user_id` on `screen` within `window`.
    pub fn filter_unseen(
        &self,
        matches: Vec<InsightMatch>,
        user_id: &str,
        screen: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Vec<InsightMatch> {
        matches
            .into_iter()
            .filter(|m| !self.seen_within(&SeenKey::new(user_id, screen, m.id.as_str()), window, now))
            .collect()
    }

    /// Drop entries past the retention window. Returns how many were removed.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let retention = self.config.retention();
        let before = self.entries.len();
        self.entries
            .retain(|_, at| now.signed_duration_since(*at) < retention);
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "Seen store pruned");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
