use entgraph_core::{Column, FkAction, ForeignKey, SchemaDocument, SchemaGraph, Table};

#[test]
fn serializes_document_deterministically() {
    let document = SchemaDocument {
        schema_version: "0.1".to_string(),
        tables: Vec::new(),
    };

    let json = serde_json::to_string_pretty(&document).expect("serialize document");
    let expected = r#"{
  "schema_version": "0.1",
  "tables": []
}"#;
    assert_eq!(json, expected);
}

#[test]
fn graph_deserializes_through_validation() {
    let json = r#"{
        "tables": [
            {
                "name": "files",
                "columns": [{ "name": "id", "data_type": "text", "is_nullable": false }],
                "primary_key": { "name": "files_pkey", "columns": ["id"] }
            },
            {
                "name": "videos",
                "columns": [
                    { "name": "id", "data_type": "text", "is_nullable": false },
                    { "name": "posterId", "data_type": "text", "is_nullable": true }
                ],
                "primary_key": { "name": "videos_pkey", "columns": ["id"] },
                "foreign_keys": [
                    {
                        "name": "videos_posterId_fkey",
                        "columns": ["posterId"],
                        "referenced_table": "files",
                        "referenced_columns": ["id"],
                        "on_delete": "set_null"
                    }
                ]
            }
        ]
    }"#;

    let graph: SchemaGraph = serde_json::from_str(json).expect("parse graph");
    assert_eq!(graph.len(), 2);

    let videos = graph.table("videos").expect("videos table");
    let fk = &videos.foreign_keys[0];
    assert_eq!(fk.on_delete, FkAction::SetNull);
    assert_eq!(fk.on_update, FkAction::NoAction);
    assert!(videos.find_column("posterId").unwrap().is_nullable);
}

#[test]
fn malformed_graph_is_rejected_on_deserialize() {
    let json = r#"{
        "tables": [
            { "name": "files", "columns": [] },
            { "name": "files", "columns": [] }
        ]
    }"#;

    let err = serde_json::from_str::<SchemaGraph>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate table name"));
}

#[test]
fn graph_round_trips_table_order() {
    let graph = SchemaGraph::new(vec![
        Table::new("videos")
            .column(Column::new("id", "text"))
            .column(Column::new("fileId", "text"))
            .foreign_key(
                ForeignKey::new("videos_fileId_fkey", "fileId", "files", "id")
                    .on_delete(FkAction::Cascade)
                    .on_update(FkAction::Restrict),
            ),
        Table::new("files").column(Column::new("id", "text")),
    ])
    .expect("valid graph");

    let json = serde_json::to_value(&graph).expect("serialize graph");
    let restored: SchemaGraph = serde_json::from_value(json).expect("deserialize graph");
    let names: Vec<&str> = restored.tables().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["videos", "files"]);
    let fk = &restored.tables()[0].foreign_keys[0];
    assert_eq!(fk.on_delete, FkAction::Cascade);
    assert_eq!(fk.on_update, FkAction::Restrict);
}

#[test]
fn parses_sql_action_spelling() {
    assert_eq!(FkAction::from_sql("SET NULL"), FkAction::SetNull);
    assert_eq!(FkAction::from_sql("cascade"), FkAction::Cascade);
    assert_eq!(FkAction::from_sql("NO ACTION"), FkAction::NoAction);
    assert_eq!(FkAction::from_sql("BOGUS"), FkAction::Unknown);
}
