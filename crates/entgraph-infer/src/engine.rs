use std::time::Instant;

use entgraph_core::{SchemaGraph, Table};
use tracing::{debug, info, warn};

use crate::builder::{EdgeBuilder, EdgePair, resolve};
use crate::errors::InferError;
use crate::join_table::detect;
use crate::options::InferOptions;
use crate::registry::MutationRegistry;
use crate::report::InferenceReport;

/// Entry point for deriving relationship edges from a schema graph.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    options: InferOptions,
}

impl InferenceEngine {
    pub fn new(options: InferOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InferOptions {
        &self.options
    }

    /// Infer into a fresh registry.
    pub fn infer(&self, graph: &SchemaGraph) -> (MutationRegistry, InferenceReport) {
        let mut registry = MutationRegistry::new();
        let report = self.run(graph, &mut registry);
        (registry, report)
    }

    /// Infer into `registry`, which may hold nodes from an earlier run over the
    /// same or an older graph. Tables are walked in graph order and each
    /// table's foreign keys in declaration order.
    pub fn run(&self, graph: &SchemaGraph, registry: &mut MutationRegistry) -> InferenceReport {
        let start = Instant::now();
        let builder = EdgeBuilder::new(&self.options);
        let mut report = InferenceReport::new();

        info!(
            tables = graph.len(),
            detect_join_tables = self.options.detect_join_tables,
            "relationship inference started"
        );

        for table in graph.tables() {
            if self.options.detect_join_tables {
                if let Some(join) = detect(graph, table) {
                    debug!(table = %table.name, "treating table as many-to-many join");
                    report.join_tables.push(table.name.clone());
                    report.tables_processed += 1;
                    match builder.build_many_to_many(&join, registry) {
                        Ok(pair) => apply(pair, registry, &mut report, true),
                        Err(err) => skip(err, &mut report),
                    }
                    continue;
                }
            }

            registry.ensure_node(&table.name);
            self.infer_table(graph, table, &builder, registry, &mut report);
            report.tables_processed += 1;
        }

        info!(
            tables = report.tables_processed,
            edge_pairs = report.edge_pairs,
            many_to_many_pairs = report.many_to_many_pairs,
            edges_inserted = report.edges_inserted,
            edges_updated = report.edges_updated,
            issues = report.issues.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "relationship inference finished"
        );

        report
    }

    fn infer_table(
        &self,
        graph: &SchemaGraph,
        table: &Table,
        builder: &EdgeBuilder<'_>,
        registry: &mut MutationRegistry,
        report: &mut InferenceReport,
    ) {
        for foreign_key in &table.foreign_keys {
            let pair = resolve(graph, table, foreign_key)
                .and_then(|resolved| builder.build(&resolved, registry));
            match pair {
                Ok(pair) => apply(pair, registry, report, false),
                Err(err) => skip(err, report),
            }
        }
    }
}

fn apply(
    pair: EdgePair,
    registry: &mut MutationRegistry,
    report: &mut InferenceReport,
    many_to_many: bool,
) {
    debug!(
        source = %pair.source_table,
        forward = %pair.forward.name,
        target = %pair.target_table,
        inverse = %pair.inverse.name,
        unique = pair.forward.unique,
        "edge pair derived"
    );
    let inserted = pair.apply(registry);
    report.record_pair(inserted, many_to_many);
}

fn skip(err: InferError, report: &mut InferenceReport) {
    warn!(code = err.code(), table = %err.table(), error = %err, "foreign key skipped");
    report.record_issue(err);
}
