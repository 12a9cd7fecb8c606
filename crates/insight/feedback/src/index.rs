//! Latest-feedback index
//!
//! Built by folding feedback rows into a map of insight id to the newest
//! record. On equal timestamps the record folded in last wins.

use std::collections::HashMap;
use std::path::Path;

use insight_types::{FeedbackIndex, FeedbackRecord};
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct LatestFeedbackIndex {
    latest: HashMap<String, FeedbackRecord>,
}

impl LatestFeedbackIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce a sequence of records to the latest per insight id.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FeedbackRecord>,
    {
        let mut index = Self::new();
        for record in records {
            index.record(record);
        }
        debug!(insights = index.len(), "Feedback index built");
        index
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FeedbackRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Fold in one record. Older records than the one held are ignored.
    pub fn record(&mut self, record: FeedbackRecord) {
        let is_newer = self
            .latest
            .get(&record.insight_id)
            .map_or(true, |current| current.created_at <= record.created_at);
        if is_newer {
            self.latest.insert(record.insight_id.clone(), record);
        }
    }

    pub fn get(&self, insight_id: &str) -> Option<&FeedbackRecord> {
        self.latest.get(insight_id)
    }

    pub fn len(&self) -> usize {
        self.latest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}

impl FeedbackIndex for LatestFeedbackIndex {
    fn latest(&self, insight_id: &str) -> Option<FeedbackRecord> {
        self.latest.get(insight_id).cloned()
    }
}

impl FromIterator<FeedbackRecord> for LatestFeedbackIndex {
    fn from_iter<I: IntoIterator<Item = FeedbackRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
