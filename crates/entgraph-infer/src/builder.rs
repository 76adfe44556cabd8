use entgraph_core::{Column, ForeignKey, SchemaGraph, Table};
use heck::ToSnakeCase;

use crate::cardinality::{Cardinality, classify};
use crate::edge::{Edge, UpsertOutcome};
use crate::errors::InferError;
use crate::join_table::JoinTable;
use crate::naming::{inverse_base_name, plural, resolve_name, strip_id_suffix, type_name};
use crate::options::InferOptions;
use crate::registry::MutationRegistry;

/// A single-column foreign key with both ends looked up in the graph.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedForeignKey<'g> {
    pub table: &'g Table,
    pub foreign_key: &'g ForeignKey,
    pub column: &'g Column,
    pub referenced_table: &'g Table,
    pub referenced_column: &'g Column,
}

impl ResolvedForeignKey<'_> {
    pub fn is_self_referencing(&self) -> bool {
        self.table.name == self.referenced_table.name
    }
}

/// Check the shape of `foreign_key` and look up its columns.
pub fn resolve<'g>(
    graph: &'g SchemaGraph,
    table: &'g Table,
    foreign_key: &'g ForeignKey,
) -> Result<ResolvedForeignKey<'g>, InferError> {
    if foreign_key.is_composite() {
        return Err(InferError::CompositeKeyUnsupported {
            table: table.name.clone(),
            foreign_key: foreign_key.display_name(),
            columns: foreign_key
                .columns
                .len()
                .max(foreign_key.referenced_columns.len()),
        });
    }

    let dangling = |target: String| InferError::DanglingForeignKey {
        table: table.name.clone(),
        foreign_key: foreign_key.display_name(),
        target,
    };

    let column = table
        .find_column(&foreign_key.columns[0])
        .ok_or_else(|| dangling(format!("{}.{}", table.name, foreign_key.columns[0])))?;
    let (referenced_table, referenced_column) =
        graph.referenced_column(foreign_key).map_err(|_| {
            dangling(format!(
                "{}.{}",
                foreign_key.referenced_table, foreign_key.referenced_columns[0]
            ))
        })?;

    Ok(ResolvedForeignKey {
        table,
        foreign_key,
        column,
        referenced_table,
        referenced_column,
    })
}

/// Forward edge plus the inverse edge that pairs with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgePair {
    pub source_table: String,
    pub forward: Edge,
    pub target_table: String,
    pub inverse: Edge,
}

impl EdgePair {
    /// Upsert both edges. Returns how many of the two were new.
    pub fn apply(self, registry: &mut MutationRegistry) -> usize {
        let forward = registry.upsert(&self.source_table, self.forward);
        let inverse = registry.upsert(&self.target_table, self.inverse);
        [forward, inverse]
            .into_iter()
            .filter(|outcome| *outcome == UpsertOutcome::Inserted)
            .count()
    }
}

/// Derives named edge pairs against the current registry state.
///
/// Building never writes: both names are settled first so a naming failure
/// leaves the registry untouched.
#[derive(Debug, Clone)]
pub struct EdgeBuilder<'o> {
    options: &'o InferOptions,
}

impl<'o> EdgeBuilder<'o> {
    pub fn new(options: &'o InferOptions) -> Self {
        Self { options }
    }

    pub fn build(
        &self,
        resolved: &ResolvedForeignKey<'_>,
        registry: &MutationRegistry,
    ) -> Result<EdgePair, InferError> {
        let cardinality = classify(resolved.table, resolved.column, resolved.referenced_column);
        let forward = self.forward_edge(resolved, cardinality, registry)?;
        let inverse = self.inverse_edge(resolved, cardinality, &forward.name, registry)?;

        Ok(EdgePair {
            source_table: resolved.table.name.clone(),
            forward,
            target_table: resolved.referenced_table.name.clone(),
            inverse,
        })
    }

    fn forward_edge(
        &self,
        resolved: &ResolvedForeignKey<'_>,
        cardinality: Cardinality,
        registry: &MutationRegistry,
    ) -> Result<Edge, InferError> {
        let table = &resolved.table.name;
        let base = strip_id_suffix(&resolved.column.name, &self.options.id_suffixes);

        let mut edge = Edge::forward(base, type_name(&resolved.referenced_table.name))
            .field(resolved.column.name.as_str())
            .unique(cardinality.is_unique())
            .optional(cardinality.source_optional)
            .on_delete(resolved.foreign_key.on_delete);

        let referenced = resolved.referenced_table.name.to_lowercase();
        let qualifiers = [Some(referenced.as_str()), resolved.foreign_key.name.as_deref()];
        edge.name = resolve_name(base, &qualifiers, |name| {
            registry.is_name_free(table, name, &edge)
        })
        .ok_or_else(|| ambiguous(resolved.foreign_key, table, base))?;

        Ok(edge)
    }

    fn inverse_edge(
        &self,
        resolved: &ResolvedForeignKey<'_>,
        cardinality: Cardinality,
        forward_name: &str,
        registry: &MutationRegistry,
    ) -> Result<Edge, InferError> {
        let self_referencing = resolved.is_self_referencing();
        let table = &resolved.referenced_table.name;
        let base = inverse_base_name(
            &resolved.table.name,
            cardinality.relation,
            self_referencing,
        );

        // After disambiguation the slot belongs to this forward edge alone,
        // so uniqueness follows the forward relation directly.
        let mut edge = Edge::inverse(base.as_str(), type_name(&resolved.table.name), forward_name)
            .unique(cardinality.is_unique())
            .optional(cardinality.target_optional);

        let qualifiers = [Some(forward_name), resolved.foreign_key.name.as_deref()];
        edge.name = resolve_name(&base, &qualifiers, |name| {
            let reserved = self_referencing && name == forward_name;
            !reserved && registry.is_name_free(table, name, &edge)
        })
        .ok_or_else(|| ambiguous(resolved.foreign_key, table, &base))?;

        Ok(edge)
    }

    /// Edges for a join table: a forward edge on the left target listing the
    /// right targets, paired with an inverse edge on the right target.
    pub fn build_many_to_many(
        &self,
        join: &JoinTable<'_>,
        registry: &MutationRegistry,
    ) -> Result<EdgePair, InferError> {
        let left = &join.left.referenced_table.name;
        let right = &join.right.referenced_table.name;
        let self_referencing = left == right;

        let forward_base = plural(&right.to_snake_case());
        let mut forward = Edge::forward(forward_base.as_str(), type_name(right))
            .through(join.table.name.as_str());

        let right_column = strip_id_suffix(&join.right.column.name, &self.options.id_suffixes);
        let qualifiers = [Some(right_column), join.right.foreign_key.name.as_deref()];
        forward.name = resolve_name(&forward_base, &qualifiers, |name| {
            registry.is_name_free(left, name, &forward)
        })
        .ok_or_else(|| ambiguous(join.right.foreign_key, left, &forward_base))?;

        let inverse_base = plural(&left.to_snake_case());
        let mut inverse =
            Edge::inverse(inverse_base.as_str(), type_name(left), forward.name.as_str())
                .through(join.table.name.as_str());

        let qualifiers = [
            Some(forward.name.as_str()),
            join.left.foreign_key.name.as_deref(),
        ];
        inverse.name = resolve_name(&inverse_base, &qualifiers, |name| {
            let reserved = self_referencing && name == forward.name;
            !reserved && registry.is_name_free(right, name, &inverse)
        })
        .ok_or_else(|| ambiguous(join.left.foreign_key, right, &inverse_base))?;

        Ok(EdgePair {
            source_table: left.clone(),
            forward,
            target_table: right.clone(),
            inverse,
        })
    }
}

fn ambiguous(foreign_key: &ForeignKey, table: &str, candidate: &str) -> InferError {
    InferError::AmbiguousEdgeName {
        table: table.to_string(),
        foreign_key: foreign_key.display_name(),
        candidate: candidate.to_string(),
    }
}
