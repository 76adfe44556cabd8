use entgraph_core::{Column, Table};
use serde::{Deserialize, Serialize};

/// Shape of the relationship a single-column foreign key implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    OneToOne,
    OneToMany,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub relation: Relation,
    /// The owning side may have no target.
    pub source_optional: bool,
    /// The referenced side may have no owner.
    pub target_optional: bool,
}

impl Cardinality {
    pub fn is_unique(&self) -> bool {
        self.relation == Relation::OneToOne
    }
}

/// Classify the foreign key `column` of `source` pointing at `referenced`.
///
/// The key is one-to-one when its column alone is unique on the source
/// table; anything else is the many side of a one-to-many.
pub fn classify(source: &Table, column: &Column, referenced: &Column) -> Cardinality {
    let relation = if source.is_unique_column(&column.name) {
        Relation::OneToOne
    } else {
        Relation::OneToMany
    };

    let target_optional = match relation {
        Relation::OneToMany => true,
        Relation::OneToOne => referenced.is_nullable,
    };

    Cardinality {
        relation,
        source_optional: column.is_nullable,
        target_optional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entgraph_core::Index;

    fn users_id() -> Column {
        Column::new("id", "bigint")
    }

    #[test]
    fn non_unique_column_is_many_side() {
        let posts = Table::new("posts")
            .column(Column::new("id", "bigint"))
            .column(Column::new("author_id", "bigint").nullable())
            .primary_key(&["id"]);
        let column = posts.find_column("author_id").unwrap();

        let cardinality = classify(&posts, column, &users_id());
        assert_eq!(cardinality.relation, Relation::OneToMany);
        assert!(!cardinality.is_unique());
        assert!(cardinality.source_optional);
        assert!(cardinality.target_optional);
    }

    #[test]
    fn unique_index_makes_one_to_one() {
        let profiles = Table::new("profiles")
            .column(Column::new("id", "bigint"))
            .column(Column::new("user_id", "bigint"))
            .primary_key(&["id"])
            .index(Index::unique("profiles_user_id_key", &["user_id"]));
        let column = profiles.find_column("user_id").unwrap();

        let cardinality = classify(&profiles, column, &users_id());
        assert_eq!(cardinality.relation, Relation::OneToOne);
        assert!(!cardinality.source_optional);
        assert!(!cardinality.target_optional);
    }

    #[test]
    fn shared_primary_key_is_one_to_one() {
        let settings = Table::new("settings")
            .column(Column::new("user_id", "bigint"))
            .primary_key(&["user_id"]);
        let column = settings.find_column("user_id").unwrap();

        let referenced = users_id().nullable();
        let cardinality = classify(&settings, column, &referenced);
        assert!(cardinality.is_unique());
        assert!(cardinality.target_optional);
    }

    #[test]
    fn composite_unique_index_does_not_count() {
        let members = Table::new("members")
            .column(Column::new("team_id", "bigint"))
            .column(Column::new("user_id", "bigint"))
            .index(Index::unique("members_team_user_key", &["team_id", "user_id"]));
        let column = members.find_column("user_id").unwrap();

        assert_eq!(
            classify(&members, column, &users_id()).relation,
            Relation::OneToMany
        );
    }
}
