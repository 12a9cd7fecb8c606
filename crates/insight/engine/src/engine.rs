//! Engine façade
//!
//! Composes enabled rules → matching → ranking → optional feedback
//! suppression, and memoizes the ranked result of the most recent snapshot.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use insight_types::{ContextSnapshot, FeedbackIndex, InsightMatch};
use tracing::{debug, trace};

use crate::cache::{CacheStats, EvaluationCache};
use crate::canonical::stable_stringify;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::matcher::{Matcher, RuleMatcher};
use crate::ranker::rank;
use crate::rule_set::RuleSet;
use crate::suppress::suppress;

/// Per-call options.
#[derive(Clone, Copy, Default)]
pub struct EvaluateOptions<'a> {
    /// Latest-feedback lookup. When absent, nothing is suppressed.
    pub feedback: Option<&'a dyn FeedbackIndex>,
    /// Reference time for suppression. Defaults to the current time.
    pub now: Option<DateTime<Utc>>,
    /// Attach a per-condition trace to every match.
    pub explain: bool,
}

impl<'a> EvaluateOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feedback(mut self, feedback: &'a dyn FeedbackIndex) -> Self {
        self.feedback = Some(feedback);
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn explained(mut self) -> Self {
        self.explain = true;
        self
    }
}

impl fmt::Debug for EvaluateOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluateOptions")
            .field("feedback", &self.feedback.is_some())
            .field("now", &self.now)
            .field("explain", &self.explain)
            .finish()
    }
}

/// The insight rule engine.
///
/// Synchronous and side-effect free apart from its own single-entry cache.
/// Each instance owns its cache, so engines built from different rule sets
/// never share results.
#[derive(Debug)]
pub struct InsightEngine<M = RuleMatcher> {
    rule_set: RuleSet,
    config: EngineConfig,
    matcher: M,
    cache: EvaluationCache,
}

impl InsightEngine<RuleMatcher> {
    /// Create an engine with the default configuration.
    pub fn new(rule_set: RuleSet) -> Self {
        Self::with_config(rule_set, EngineConfig::default())
    }

    pub fn with_config(rule_set: RuleSet, config: EngineConfig) -> Self {
        let matcher = RuleMatcher::new(config.eq_tolerance);
        Self::with_matcher(rule_set, config, matcher)
    }
}

impl<M: Matcher> InsightEngine<M> {
    /// Create an engine around a custom matcher.
    pub fn with_matcher(rule_set: RuleSet, config: EngineConfig, matcher: M) -> Self {
        let enabled = rule_set.enabled().count();
        debug!(
            rules = rule_set.len(),
            enabled,
            disabled = rule_set.len() - enabled,
            cache = config.cache_enabled,
            "Insight engine created"
        );

        Self {
            rule_set,
            config,
            matcher,
            cache: EvaluationCache::new(),
        }
    }

    /// Every match for `context`, best first.
    pub fn evaluate_all(
        &self,
        context: &ContextSnapshot,
        options: &EvaluateOptions<'_>,
    ) -> Vec<InsightMatch> {
        let ranked = self.ranked(context, options.explain);
        match options.feedback {
            Some(feedback) => {
                let now = options.now.unwrap_or_else(Utc::now);
                suppress(&ranked, feedback, now, &self.config.suppression)
            }
            None => ranked.as_ref().clone(),
        }
    }

    /// The best match for `context`, if any.
    pub fn evaluate_one(
        &self,
        context: &ContextSnapshot,
        options: &EvaluateOptions<'_>,
    ) -> Option<InsightMatch> {
        self.evaluate_all(context, options).into_iter().next()
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn ranked(&self, context: &ContextSnapshot, explain: bool) -> Arc<Vec<InsightMatch>> {
        if !self.config.cache_enabled {
            return Arc::new(self.compute(context, explain));
        }

        let key = match cache_key(context, explain) {
            Ok(key) => key,
            Err(e) => {
                debug!(error = %e, "Snapshot has no canonical form, evaluating without cache");
                return Arc::new(self.compute(context, explain));
            }
        };

        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let computed = Arc::new(self.compute(context, explain));
        self.cache.put(key, Arc::clone(&computed));
        computed
    }

    fn compute(&self, context: &ContextSnapshot, explain: bool) -> Vec<InsightMatch> {
        let mut matches: Vec<InsightMatch> = self
            .rule_set
            .enabled()
            .filter_map(|rule| {
                let outcome = self.matcher.match_rule(rule, context, explain);
                trace!(rule = %rule.id, matched = outcome.is_match, "Rule evaluated");
                outcome.is_match.then(|| {
                    InsightMatch::from_rule(rule, outcome.satisfied_conditions, outcome.trace)
                })
            })
            .collect();

        rank(&mut matches);
        matches
    }
}

fn cache_key(context: &ContextSnapshot, explain: bool) -> Result<String> {
    Ok(format!("{}|explain={}", stable_stringify(context)?, explain))
}
