use thiserror::Error;

/// Error type for the relational schema model.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// Convenience alias for results returned by entgraph crates.
pub type Result<T> = std::result::Result<T, Error>;
