//! Edge and type naming.
//!
//! Forward edges are named after their foreign-key column with the id suffix
//! stripped (`posterId` -> `poster`). When that name is already held by a
//! different edge on the node, qualified alternatives are tried in a fixed
//! order; running out of alternatives is reported, never papered over.

use heck::{ToSnakeCase, ToUpperCamelCase};

use crate::cardinality::Relation;

/// Suffixes stripped from foreign-key columns unless configured otherwise.
pub const DEFAULT_ID_SUFFIXES: [&str; 3] = ["_id", "Id", "ID"];

/// Inverse base names for self-referencing keys.
const SELF_REF_MANY: &str = "children";
const SELF_REF_ONE: &str = "child";

/// Strip the first matching id suffix from `column`, along with any
/// separator it leaves behind (`user_ID` -> `user`).
///
/// A column that is nothing but the suffix (`_id`, `Id`) keeps its own name.
pub fn strip_id_suffix<'a>(column: &'a str, suffixes: &[String]) -> &'a str {
    suffixes
        .iter()
        .filter_map(|suffix| column.strip_suffix(suffix.as_str()))
        .map(|base| base.trim_end_matches('_'))
        .find(|base| !base.is_empty())
        .unwrap_or(column)
}

/// Schema type name for a table: singular, UpperCamelCase (`files` -> `File`).
///
/// `file` and `files` both map to `File`; a graph holding both tables gets
/// two nodes whose edge targets cannot be told apart.
pub fn type_name(table: &str) -> String {
    singular(table).to_upper_camel_case()
}

pub fn singular(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}

pub fn plural(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Base name of the inverse edge an owning table contributes to the table it
/// references: `videos` for one-to-many, `video` for one-to-one.
pub fn inverse_base_name(source_table: &str, relation: Relation, self_referencing: bool) -> String {
    match (self_referencing, relation) {
        (true, Relation::OneToMany) => SELF_REF_MANY.to_string(),
        (true, Relation::OneToOne) => SELF_REF_ONE.to_string(),
        (false, Relation::OneToMany) => plural(&source_table.to_snake_case()),
        (false, Relation::OneToOne) => singular(&source_table.to_snake_case()),
    }
}

/// `<qualifier>_<base>`.
pub fn qualify(qualifier: &str, base: &str) -> String {
    format!("{qualifier}_{base}")
}

/// Pick the first free name: `base`, then `base` qualified by each present
/// qualifier in order. Returns `None` when every candidate is taken.
pub fn resolve_name<F>(base: &str, qualifiers: &[Option<&str>], is_free: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    if is_free(base) {
        return Some(base.to_string());
    }

    qualifiers
        .iter()
        .flatten()
        .map(|qualifier| qualify(qualifier, base))
        .find(|candidate| is_free(candidate))
}
