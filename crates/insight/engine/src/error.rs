use thiserror::Error;

/// Errors raised while loading rules or configuration.
///
/// Evaluation itself never fails: unknown fields, missing data and
/// malformed comparison values all degrade to "no match".
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported rule file format: {0}")]
    UnsupportedFormat(String),

    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(String),

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("non-finite number at {0} has no canonical form")]
    NonFiniteNumber(String),
}

pub type Result<T> = std::result::Result<T, InsightError>;
