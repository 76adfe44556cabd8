use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::edge::{Edge, SchemaNode, UpsertOutcome};

/// Table name to schema node, the only mutable state of an inference run.
///
/// Mutation requires `&mut self`, so a registry has exactly one writer at a
/// time; callers that infer tables in parallel must merge into one writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutationRegistry {
    nodes: BTreeMap<String, SchemaNode>,
}

impl MutationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from nodes produced by an earlier run.
    pub fn from_nodes(nodes: BTreeMap<String, SchemaNode>) -> Self {
        Self { nodes }
    }

    /// Get the node for `table`, creating an empty one on first reference.
    pub fn ensure_node(&mut self, table: &str) -> &mut SchemaNode {
        self.nodes
            .entry(table.to_string())
            .or_insert_with(|| SchemaNode::new(table))
    }

    /// Insert `edge` on `table`'s node, or update the edge already holding
    /// that name. Only `unique`, `kind`, `ref_name`, `optional` and
    /// `on_delete` are updated; `target`, `field` and `through` stay put.
    pub fn upsert(&mut self, table: &str, edge: Edge) -> UpsertOutcome {
        self.ensure_node(table).upsert(edge)
    }

    pub fn node(&self, table: &str) -> Option<&SchemaNode> {
        self.nodes.get(table)
    }

    /// Whether `name` is available on `table` for `proposed`. Tables without
    /// a node yet have every name free.
    pub fn is_name_free(&self, table: &str, name: &str, proposed: &Edge) -> bool {
        self.node(table)
            .map_or(true, |node| node.is_name_free(name, proposed))
    }

    pub fn nodes(&self) -> &BTreeMap<String, SchemaNode> {
        &self.nodes
    }

    pub fn into_nodes(self) -> BTreeMap<String, SchemaNode> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.edges.len()).sum()
    }
}
