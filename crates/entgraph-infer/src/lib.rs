//! Relationship inference for entgraph.
//!
//! Turns the foreign keys of a [`SchemaGraph`](entgraph_core::SchemaGraph)
//! into named, paired object-graph edges and merges them idempotently into a
//! per-table [`SchemaNode`] map for a downstream renderer.

pub mod builder;
pub mod cardinality;
pub mod edge;
pub mod engine;
pub mod errors;
pub mod join_table;
pub mod logging;
pub mod naming;
pub mod options;
pub mod registry;
pub mod report;

pub use builder::{EdgeBuilder, EdgePair, ResolvedForeignKey};
pub use cardinality::{Cardinality, Relation, classify};
pub use edge::{Edge, EdgeKind, SchemaNode, UpsertOutcome};
pub use engine::InferenceEngine;
pub use errors::{ConfigError, InferError};
pub use logging::init_logging;
pub use options::{InferOptions, LogOptions};
pub use registry::MutationRegistry;
pub use report::InferenceReport;
