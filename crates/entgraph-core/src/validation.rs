use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::Table;

/// Validate internal consistency of a set of tables.
///
/// This checks:
/// - duplicate tables/columns
/// - primary key and index columns exist
/// - foreign key source columns exist
///
/// References to other tables are left alone: a foreign key pointing at a
/// missing table or column is reported per key during inference.
pub fn validate_tables(tables: &[Table]) -> Result<()> {
    let mut names = BTreeSet::new();

    for table in tables {
        if !names.insert(table.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }

        for column in table.primary_key_columns() {
            if !columns.contains(column.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "primary key column not found: {}.{}",
                    table.name, column
                )));
            }
        }

        for index in &table.indexes {
            for column in &index.columns {
                if !columns.contains(column.as_str()) {
                    return Err(Error::InvalidSchema(format!(
                        "index column not found: {}.{} ({})",
                        table.name, column, index.name
                    )));
                }
            }
        }

        for fk in &table.foreign_keys {
            for column in &fk.columns {
                if !columns.contains(column.as_str()) {
                    return Err(Error::InvalidSchema(format!(
                        "foreign key column not found: {}.{}",
                        table.name, column
                    )));
                }
            }
        }
    }

    Ok(())
}
