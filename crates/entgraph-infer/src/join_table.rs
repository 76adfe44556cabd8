use std::collections::BTreeSet;

use entgraph_core::{SchemaGraph, Table};

use crate::builder::{ResolvedForeignKey, resolve};

/// A table that only links two others: exactly two single-column foreign
/// keys whose columns make up the whole primary key.
#[derive(Debug, Clone, Copy)]
pub struct JoinTable<'g> {
    pub table: &'g Table,
    pub left: ResolvedForeignKey<'g>,
    pub right: ResolvedForeignKey<'g>,
}

/// Recognize `table` as a join table. Keys that fail to resolve disqualify it,
/// leaving the table to ordinary per-key inference and its error reporting.
pub fn detect<'g>(graph: &'g SchemaGraph, table: &'g Table) -> Option<JoinTable<'g>> {
    let [left, right] = table.foreign_keys.as_slice() else {
        return None;
    };

    let pk: BTreeSet<&str> = table
        .primary_key_columns()
        .iter()
        .map(String::as_str)
        .collect();
    let fk_columns: BTreeSet<&str> = [left, right]
        .into_iter()
        .flat_map(|fk| fk.columns.iter().map(String::as_str))
        .collect();
    if table.primary_key_columns().len() != 2 || pk != fk_columns {
        return None;
    }

    let left = resolve(graph, table, left).ok()?;
    let right = resolve(graph, table, right).ok()?;
    Some(JoinTable { table, left, right })
}
