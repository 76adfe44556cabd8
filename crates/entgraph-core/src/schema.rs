use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constraints::{ForeignKey, Index, PrimaryKey};
use crate::error::{Error, Result};
use crate::validation::validate_tables;

/// Serialized form of a schema graph, as produced by an introspection adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SchemaDocument {
    /// Contract version for this document format.
    #[serde(default = "default_version")]
    pub schema_version: String,
    pub tables: Vec<Table>,
}

fn default_version() -> String {
    crate::SCHEMA_VERSION.to_string()
}

/// A relational table with its columns, keys and indexes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub primary_key: Option<PrimaryKey>,
    /// Declaration order is significant for edge naming.
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default)]
    pub indexes: Vec<Index>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            primary_key: None,
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key(mut self, columns: &[&str]) -> Self {
        self.primary_key = Some(PrimaryKey::new(columns));
        self
    }

    pub fn foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    /// Look up a column by exact name.
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns true when `column` alone forms a unique index on this table,
    /// either as a single-column primary key or a single-column unique index.
    pub fn is_unique_column(&self, column: &str) -> bool {
        let sole = |columns: &[String]| columns.len() == 1 && columns[0] == column;

        if let Some(pk) = &self.primary_key {
            if sole(pk.columns.as_slice()) {
                return true;
            }
        }

        self.indexes
            .iter()
            .any(|index| index.is_unique && sole(index.columns.as_slice()))
    }

    pub fn primary_key_columns(&self) -> &[String] {
        self.primary_key
            .as_ref()
            .map(|pk| pk.columns.as_slice())
            .unwrap_or(&[])
    }
}

/// Column metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Column {
    pub name: String,
    /// Declared SQL type, kept verbatim.
    pub data_type: String,
    pub is_nullable: bool,
}

impl Column {
    /// A non-null column.
    pub fn new(name: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: data_type.to_string(),
            is_nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }
}

/// Immutable, validated view over a set of tables.
///
/// Table order is the order tables were supplied in and is the order
/// relationship inference walks them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SchemaDocument", into = "SchemaDocument")]
pub struct SchemaGraph {
    tables: Vec<Table>,
    by_name: BTreeMap<String, usize>,
}

impl SchemaGraph {
    /// Build a graph, rejecting structurally malformed input.
    pub fn new(tables: Vec<Table>) -> Result<Self> {
        validate_tables(&tables)?;

        let by_name = tables
            .iter()
            .enumerate()
            .map(|(idx, table)| (table.name.clone(), idx))
            .collect();

        Ok(Self { tables, by_name })
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.by_name.get(name).map(|idx| &self.tables[*idx])
    }

    /// Resolve the table and column a foreign key points at.
    pub fn referenced_column(&self, foreign_key: &ForeignKey) -> Result<(&Table, &Column)> {
        let table = self.table(&foreign_key.referenced_table).ok_or_else(|| {
            Error::InvalidSchema(format!(
                "referenced table not found: {}",
                foreign_key.referenced_table
            ))
        })?;
        let column_name = foreign_key.referenced_columns.first().ok_or_else(|| {
            Error::InvalidSchema(format!(
                "foreign key {} has no referenced columns",
                foreign_key.display_name()
            ))
        })?;
        let column = table.find_column(column_name).ok_or_else(|| {
            Error::InvalidSchema(format!(
                "referenced column not found: {}.{}",
                table.name, column_name
            ))
        })?;
        Ok((table, column))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TryFrom<SchemaDocument> for SchemaGraph {
    type Error = Error;

    fn try_from(document: SchemaDocument) -> Result<Self> {
        SchemaGraph::new(document.tables)
    }
}

impl From<SchemaGraph> for SchemaDocument {
    fn from(graph: SchemaGraph) -> Self {
        SchemaDocument {
            schema_version: crate::SCHEMA_VERSION.to_string(),
            tables: graph.tables,
        }
    }
}
