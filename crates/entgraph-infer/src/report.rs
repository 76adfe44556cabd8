use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::InferError;

/// Summary of an inference run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InferenceReport {
    pub tables_processed: usize,
    /// Tables consumed as many-to-many links rather than given a node.
    pub join_tables: Vec<String>,
    /// Forward/inverse pairs derived from ordinary foreign keys.
    pub edge_pairs: usize,
    /// Pairs derived from join tables.
    pub many_to_many_pairs: usize,
    /// Edges appended to a node; the rest replaced an existing edge.
    pub edges_inserted: usize,
    pub edges_updated: usize,
    /// Foreign keys that were skipped, in processing order.
    pub issues: Vec<InferError>,
    pub issues_by_code: BTreeMap<String, u64>,
}

impl InferenceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn record_issue(&mut self, issue: InferError) {
        *self
            .issues_by_code
            .entry(issue.code().to_string())
            .or_insert(0) += 1;
        self.issues.push(issue);
    }

    pub(crate) fn record_pair(&mut self, inserted: usize, many_to_many: bool) {
        if many_to_many {
            self.many_to_many_pairs += 1;
        } else {
            self.edge_pairs += 1;
        }
        self.edges_inserted += inserted;
        self.edges_updated += 2 - inserted;
    }
}
