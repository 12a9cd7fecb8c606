#[path = "e2e/reference_scenarios.rs"]
mod reference_scenarios;

#[path = "e2e/tie_breaks.rs"]
mod tie_breaks;

#[path = "e2e/feedback_cooldowns.rs"]
mod feedback_cooldowns;

#[path = "e2e/cache_reuse.rs"]
mod cache_reuse;
