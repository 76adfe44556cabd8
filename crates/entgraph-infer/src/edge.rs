use entgraph_core::FkAction;
use serde::{Deserialize, Serialize};

use crate::naming::type_name;

/// Which side of a relationship an edge describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Declared on the table that owns the foreign key.
    Forward,
    /// Declared on the referenced table, pointing back via `ref_name`.
    Inverse,
}

/// A named relationship from one schema node to another type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub name: String,
    /// Schema type name of the other end, e.g. `File`.
    pub target: String,
    /// Name of the forward edge an inverse edge pairs with.
    pub ref_name: Option<String>,
    /// Foreign-key column backing a forward edge.
    pub field: Option<String>,
    pub unique: bool,
    pub optional: bool,
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<FkAction>,
    /// Join table of a many-to-many edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub through: Option<String>,
}

impl Edge {
    pub fn forward(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            ref_name: None,
            field: None,
            unique: false,
            optional: true,
            kind: EdgeKind::Forward,
            on_delete: None,
            through: None,
        }
    }

    pub fn inverse(
        name: impl Into<String>,
        target: impl Into<String>,
        ref_name: impl Into<String>,
    ) -> Self {
        Self {
            ref_name: Some(ref_name.into()),
            kind: EdgeKind::Inverse,
            ..Self::forward(name, target)
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn on_delete(mut self, action: FkAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    pub fn through(mut self, table: impl Into<String>) -> Self {
        self.through = Some(table.into());
        self
    }

    pub fn is_inverse(&self) -> bool {
        self.kind == EdgeKind::Inverse
    }

    /// True when both edges describe the same relationship, whatever their
    /// names. A forward edge is identified by its column (or join table), an
    /// inverse edge by the forward edge it pairs with.
    pub fn same_slot(&self, other: &Edge) -> bool {
        if self.kind != other.kind || self.target != other.target || self.through != other.through
        {
            return false;
        }

        match self.kind {
            EdgeKind::Forward => self.field == other.field,
            EdgeKind::Inverse => self.ref_name == other.ref_name,
        }
    }
}

/// Per-table container of edges handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub table: String,
    pub type_name: String,
    pub edges: Vec<Edge>,
}

/// Result of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

impl SchemaNode {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            type_name: type_name(table),
            edges: Vec::new(),
        }
    }

    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.name == name)
    }

    /// `name` can be given to `proposed`: nothing holds it yet, or the holder
    /// is the same relationship from an earlier run.
    pub fn is_name_free(&self, name: &str, proposed: &Edge) -> bool {
        self.edge(name)
            .map_or(true, |existing| existing.same_slot(proposed))
    }

    pub fn forward_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| !edge.is_inverse())
    }

    pub fn inverse_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| edge.is_inverse())
    }

    /// Append `edge`, or refresh the mutable attributes of the edge already
    /// holding its name. `target`, `field` and `through` never change.
    pub(crate) fn upsert(&mut self, edge: Edge) -> UpsertOutcome {
        match self.edges.iter_mut().find(|existing| existing.name == edge.name) {
            Some(existing) => {
                existing.unique = edge.unique;
                existing.kind = edge.kind;
                existing.ref_name = edge.ref_name;
                existing.optional = edge.optional;
                existing.on_delete = edge.on_delete;
                UpsertOutcome::Updated
            }
            None => {
                self.edges.push(edge);
                UpsertOutcome::Inserted
            }
        }
    }
}
