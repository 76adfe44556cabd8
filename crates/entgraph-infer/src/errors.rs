use serde::Serialize;
use thiserror::Error;

/// Per-foreign-key failures. None of these abort a run: the offending key is
/// skipped and the error is recorded in the [`InferenceReport`](crate::InferenceReport).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum InferError {
    #[error(
        "foreign key {foreign_key} on {table} spans {columns} columns; only single-column keys are supported"
    )]
    CompositeKeyUnsupported {
        table: String,
        foreign_key: String,
        columns: usize,
    },
    #[error("foreign key {foreign_key} on {table} references missing {target}")]
    DanglingForeignKey {
        table: String,
        foreign_key: String,
        target: String,
    },
    #[error("no free edge name for '{candidate}' on {table} (foreign key {foreign_key})")]
    AmbiguousEdgeName {
        table: String,
        foreign_key: String,
        candidate: String,
    },
}

impl InferError {
    /// Stable identifier used for report counters and log fields.
    pub fn code(&self) -> &'static str {
        match self {
            InferError::CompositeKeyUnsupported { .. } => "composite_key_unsupported",
            InferError::DanglingForeignKey { .. } => "dangling_foreign_key",
            InferError::AmbiguousEdgeName { .. } => "ambiguous_edge_name",
        }
    }

    /// Table whose foreign key was skipped.
    pub fn table(&self) -> &str {
        match self {
            InferError::CompositeKeyUnsupported { table, .. }
            | InferError::DanglingForeignKey { table, .. }
            | InferError::AmbiguousEdgeName { table, .. } => table,
        }
    }
}

/// Errors raised while loading options or installing the log subscriber.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
}
