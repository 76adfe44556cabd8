mod common;

use entgraph_core::{Column, ForeignKey, Index, SchemaGraph, Table};
use entgraph_infer::{EdgeKind, InferenceEngine};

use common::{assert_paired, assert_unique_names};

fn categories() -> Table {
    Table::new("categories")
        .column(Column::new("id", "bigint"))
        .column(Column::new("name", "text"))
        .column(Column::new("parent_id", "bigint").nullable())
        .primary_key(&["id"])
        .foreign_key(ForeignKey::new(
            "categories_parent_id_fkey",
            "parent_id",
            "categories",
            "id",
        ))
}

#[test]
fn self_reference_yields_parent_and_children() {
    let graph = SchemaGraph::new(vec![categories()]).unwrap();
    let (registry, report) = InferenceEngine::default().infer(&graph);
    assert!(report.is_clean());

    let node = registry.node("categories").unwrap();
    assert_eq!(node.type_name, "Category");
    assert_eq!(node.edges.len(), 2);

    let parent = node.edge("parent").expect("forward edge");
    assert_eq!(parent.kind, EdgeKind::Forward);
    assert_eq!(parent.target, "Category");
    assert_eq!(parent.field.as_deref(), Some("parent_id"));
    assert!(parent.optional);
    assert!(!parent.unique);

    let children = node.edge("children").expect("inverse edge");
    assert_eq!(children.kind, EdgeKind::Inverse);
    assert_eq!(children.ref_name.as_deref(), Some("parent"));
    assert_eq!(children.target, "Category");

    assert_unique_names(&registry);
    assert_paired(&registry);
}

#[test]
fn second_self_reference_is_qualified_by_forward_name() {
    let table = categories()
        .column(Column::new("merged_into_id", "bigint").nullable())
        .foreign_key(ForeignKey::new(
            "categories_merged_into_id_fkey",
            "merged_into_id",
            "categories",
            "id",
        ));
    let graph = SchemaGraph::new(vec![table]).unwrap();
    let (registry, report) = InferenceEngine::default().infer(&graph);
    assert!(report.is_clean());

    let names: Vec<&str> = registry
        .node("categories")
        .unwrap()
        .edges
        .iter()
        .map(|edge| edge.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["parent", "children", "merged_into", "merged_into_children"]
    );
    assert_paired(&registry);
}

#[test]
fn unique_self_reference_is_one_to_one() {
    let table = Table::new("employees")
        .column(Column::new("id", "bigint"))
        .column(Column::new("mentor_id", "bigint").nullable())
        .primary_key(&["id"])
        .index(Index::unique("employees_mentor_id_key", &["mentor_id"]))
        .foreign_key(ForeignKey::new(
            "employees_mentor_id_fkey",
            "mentor_id",
            "employees",
            "id",
        ));
    let graph = SchemaGraph::new(vec![table]).unwrap();
    let (registry, _) = InferenceEngine::default().infer(&graph);

    let node = registry.node("employees").unwrap();
    let mentor = node.edge("mentor").unwrap();
    let child = node.edge("child").unwrap();
    assert!(mentor.unique);
    assert!(child.unique);
    assert!(!child.optional);
}
