//! Input file loading

use std::path::Path;

use anyhow::{bail, Context};
use serde::de::DeserializeOwned;

/// Read a JSON or YAML document, chosen by file extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("invalid JSON in {}", path.display())),
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid YAML in {}", path.display())),
        _ => bail!(
            "unsupported file type for {} (expected .json, .yaml or .yml)",
            path.display()
        ),
    }
}
