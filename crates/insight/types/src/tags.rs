//! Tag normalization.
//!
//! Free-text tags arrive from mood entries in whatever form the user typed
//! them. Two tags are the same tag when they agree after trimming,
//! case-folding and dropping a leading `#`.

use std::collections::BTreeSet;

/// Normalize a single tag. Returns `None` for tags that are empty after
/// normalization (`""`, `"  "`, `"#"`).
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = trimmed.trim_start_matches('#').trim();
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_lowercase())
}

/// Normalize and deduplicate a collection of tags.
pub fn normalize_tags<I, S>(raw: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}
