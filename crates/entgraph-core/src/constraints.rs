use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Primary key definition preserving column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct PrimaryKey {
    pub name: Option<String>,
    pub columns: Vec<String>,
}

impl PrimaryKey {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            name: None,
            columns: columns.iter().map(|column| column.to_string()).collect(),
        }
    }
}

/// Foreign key action semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FkAction {
    #[default]
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
    Unknown,
}

impl FkAction {
    /// Parse the SQL spelling of a referential action (`SET NULL`, `cascade`, ...).
    pub fn from_sql(action: &str) -> Self {
        match action.trim().to_ascii_uppercase().as_str() {
            "NO ACTION" | "" => FkAction::NoAction,
            "RESTRICT" => FkAction::Restrict,
            "CASCADE" => FkAction::Cascade,
            "SET NULL" => FkAction::SetNull,
            "SET DEFAULT" => FkAction::SetDefault,
            _ => FkAction::Unknown,
        }
    }
}

/// Foreign key definition preserving column ordering.
///
/// `referenced_table` is a non-owning reference, resolved through the
/// [`SchemaGraph`](crate::SchemaGraph) the key belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ForeignKey {
    /// Constraint symbol, e.g. `videos_posterId_fkey`.
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    #[serde(default)]
    pub on_update: FkAction,
    #[serde(default)]
    pub on_delete: FkAction,
}

impl ForeignKey {
    /// Single-column foreign key, the only shape relationship inference accepts.
    pub fn new(
        name: &str,
        column: &str,
        referenced_table: &str,
        referenced_column: &str,
    ) -> Self {
        Self {
            name: Some(name.to_string()),
            columns: vec![column.to_string()],
            referenced_table: referenced_table.to_string(),
            referenced_columns: vec![referenced_column.to_string()],
            on_update: FkAction::NoAction,
            on_delete: FkAction::NoAction,
        }
    }

    pub fn on_delete(mut self, action: FkAction) -> Self {
        self.on_delete = action;
        self
    }

    pub fn on_update(mut self, action: FkAction) -> Self {
        self.on_update = action;
        self
    }

    /// Name used in diagnostics; falls back to the column list for unnamed keys.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("({})", self.columns.join(", ")),
        }
    }

    pub fn is_composite(&self) -> bool {
        self.columns.len() != 1 || self.referenced_columns.len() != 1
    }
}

/// Index definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    pub is_unique: bool,
}

impl Index {
    pub fn unique(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
            is_unique: true,
        }
    }
}
