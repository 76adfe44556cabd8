#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use entgraph_core::SchemaGraph;
use entgraph_infer::{EdgeKind, MutationRegistry};

pub fn load_graph(name: &str) -> SchemaGraph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("missing fixture at {}", path.display()));
    serde_json::from_str(&contents).expect("parse schema graph")
}

/// Edge names are unique per node.
pub fn assert_unique_names(registry: &MutationRegistry) {
    for (table, node) in registry.nodes() {
        let mut seen = BTreeSet::new();
        for edge in &node.edges {
            assert!(
                seen.insert(edge.name.as_str()),
                "duplicate edge '{}' on {}",
                edge.name,
                table
            );
        }
    }
}

/// Every forward edge has exactly one inverse edge on its target node and
/// every inverse edge has exactly one forward edge.
pub fn assert_paired(registry: &MutationRegistry) {
    let by_type: HashMap<&str, &str> = registry
        .nodes()
        .iter()
        .map(|(table, node)| (node.type_name.as_str(), table.as_str()))
        .collect();

    for node in registry.nodes().values() {
        for edge in &node.edges {
            let target_table = by_type
                .get(edge.target.as_str())
                .unwrap_or_else(|| panic!("no node for type {}", edge.target));
            let target = &registry.nodes()[*target_table];

            let matches = match edge.kind {
                EdgeKind::Forward => target
                    .edges
                    .iter()
                    .filter(|other| {
                        other.kind == EdgeKind::Inverse
                            && other.ref_name.as_deref() == Some(edge.name.as_str())
                            && other.target == node.type_name
                    })
                    .count(),
                EdgeKind::Inverse => target
                    .edges
                    .iter()
                    .filter(|other| {
                        other.kind == EdgeKind::Forward
                            && edge.ref_name.as_deref() == Some(other.name.as_str())
                            && other.target == node.type_name
                    })
                    .count(),
            };
            assert_eq!(
                matches, 1,
                "edge '{}' on {} is not paired exactly once",
                edge.name, node.table
            );
        }
    }
}
