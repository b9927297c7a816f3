// Declarative relationship metadata for the league schema.
//
// Purpose
// - Describe how entities reference each other: cardinality, fetch policy, cascade policy and join mapping.
//
// Boundaries
// - No loading here. The repository reads `cascade` when saving and the roster use case resolves references.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fetch {
    Lazy,
    Eager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cascade {
    None,
    Persist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Join {
    /// Foreign key column on the owning side.
    Column { name: &'static str },
    /// Inverse side, mapped by a field on the target.
    MappedBy { field: &'static str },
    /// Link table with one column per side.
    Table {
        name: &'static str,
        join_column: &'static str,
        inverse_join_column: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relation {
    pub field: &'static str,
    pub target: &'static str,
    pub cardinality: Cardinality,
    pub fetch: Fetch,
    pub cascade: Cascade,
    pub join: Join,
}

const CLUB_COMPETITION: Join = Join::Table {
    name: "club_competition",
    join_column: "club",
    inverse_join_column: "competition",
};

pub const CLUB_COACH: Relation = Relation {
    field: "coach",
    target: "Coach",
    cardinality: Cardinality::OneToOne,
    fetch: Fetch::Eager,
    cascade: Cascade::Persist,
    join: Join::Column { name: "coach_id" },
};

pub const CLUB_PLAYERS: Relation = Relation {
    field: "players",
    target: "Player",
    cardinality: Cardinality::OneToMany,
    fetch: Fetch::Lazy,
    cascade: Cascade::None,
    join: Join::MappedBy { field: "club" },
};

pub const CLUB_ASSOCIATION: Relation = Relation {
    field: "football_association",
    target: "FootballAssociation",
    cardinality: Cardinality::ManyToOne,
    fetch: Fetch::Lazy,
    cascade: Cascade::Persist,
    join: Join::Column {
        name: "football_association_id",
    },
};

pub const CLUB_COMPETITIONS: Relation = Relation {
    field: "football_competitions",
    target: "FootballCompetition",
    cardinality: Cardinality::ManyToMany,
    fetch: Fetch::Lazy,
    cascade: Cascade::None,
    join: CLUB_COMPETITION,
};

pub const PLAYER_CLUB: Relation = Relation {
    field: "club",
    target: "Club",
    cardinality: Cardinality::ManyToOne,
    fetch: Fetch::Eager,
    cascade: Cascade::None,
    join: Join::Column { name: "id_club" },
};

pub const COMPETITION_CLUBS: Relation = Relation {
    field: "clubs",
    target: "Club",
    cardinality: Cardinality::ManyToMany,
    fetch: Fetch::Lazy,
    cascade: Cascade::None,
    join: CLUB_COMPETITION,
};

/// Every entity of the schema with its outgoing relations.
pub const SCHEMA: [(&str, &[Relation]); 5] = [
    (
        "Club",
        &[CLUB_COACH, CLUB_PLAYERS, CLUB_ASSOCIATION, CLUB_COMPETITIONS],
    ),
    ("Coach", &[]),
    ("Player", &[PLAYER_CLUB]),
    ("FootballAssociation", &[]),
    ("FootballCompetition", &[COMPETITION_CLUBS]),
];

pub fn relations_of(entity: &str) -> &'static [Relation] {
    SCHEMA
        .iter()
        .find(|(name, _)| *name == entity)
        .map(|(_, relations)| *relations)
        .unwrap_or(&[])
}
