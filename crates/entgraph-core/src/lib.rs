//! Relational schema model for entgraph.
//!
//! This crate defines the read-only table, column and constraint types that
//! relationship inference consumes, plus the structural validation applied
//! when a [`SchemaGraph`] is built.

pub mod constraints;
pub mod error;
pub mod schema;
pub mod validation;

pub use constraints::{FkAction, ForeignKey, Index, PrimaryKey};
pub use error::{Error, Result};
pub use schema::{Column, SchemaDocument, SchemaGraph, Table};
pub use validation::validate_tables;

/// Current contract version for serialized schema documents.
pub const SCHEMA_VERSION: &str = "0.1";
