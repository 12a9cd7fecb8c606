//! Engine configuration.

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{InsightError, Result};

/// Tolerance used by `eq` on numbers.
pub const DEFAULT_EQ_TOLERANCE: f64 = 1e-4;

/// Cooldown after a "not relevant now" dismissal (24 hours).
pub const DEFAULT_SHORT_COOLDOWN_SECS: i64 = 24 * 60 * 60;

/// Cooldown after any other "not helpful" dismissal (7 days).
pub const DEFAULT_LONG_COOLDOWN_SECS: i64 = 7 * 24 * 60 * 60;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Keep the most recent evaluation and reuse it for equal snapshots
    pub cache_enabled: bool,
    /// Absolute tolerance for numeric `eq`
    pub eq_tolerance: f64,
    /// Feedback suppression windows
    pub suppression: SuppressionPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            eq_tolerance: DEFAULT_EQ_TOLERANCE,
            suppression: SuppressionPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_yaml(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn without_cache(mut self) -> Self {
        self.cache_enabled = false;
        self
    }

    pub fn with_eq_tolerance(mut self, tolerance: f64) -> Self {
        self.eq_tolerance = tolerance;
        self
    }

    pub fn with_suppression(mut self, suppression: SuppressionPolicy) -> Self {
        self.suppression = suppression;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.eq_tolerance.is_finite() || self.eq_tolerance < 0.0 {
            return Err(InsightError::InvalidConfig(format!(
                "eq_tolerance must be a non-negative number, got {}",
                self.eq_tolerance
            )));
        }
        self.suppression.validate()
    }
}

/// Cooldown windows for feedback suppression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressionPolicy {
    /// Applied when the dismissal reason is `not_relevant_now`
    pub short_cooldown_secs: i64,
    /// Applied to every other "not helpful" dismissal
    pub long_cooldown_secs: i64,
}

impl Default for SuppressionPolicy {
    fn default() -> Self {
        Self {
            short_cooldown_secs: DEFAULT_SHORT_COOLDOWN_SECS,
            long_cooldown_secs: DEFAULT_LONG_COOLDOWN_SECS,
        }
    }
}

impl SuppressionPolicy {
    pub fn short_cooldown(&self) -> Duration {
        Duration::seconds(self.short_cooldown_secs)
    }

    pub fn long_cooldown(&self) -> Duration {
        Duration::seconds(self.long_cooldown_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.short_cooldown_secs < 0 || self.long_cooldown_secs < 0 {
            return Err(InsightError::InvalidConfig(
                "cooldowns must not be negative".into(),
            ));
        }
        if self.short_cooldown_secs > self.long_cooldown_secs {
            return Err(InsightError::InvalidConfig(format!(
                "short cooldown ({}s) exceeds long cooldown ({}s)",
                self.short_cooldown_secs, self.long_cooldown_secs
            )));
        }
        Ok(())
    }
}
