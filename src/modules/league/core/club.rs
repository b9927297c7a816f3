use crate::modules::league::core::coach::Coach;
use crate::modules::league::core::football_association::FootballAssociation;
use serde::{Deserialize, Serialize};

/// A club row. Players point back at it through `Player::club_id`, competitions through
/// the `club_competition` join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub coach_id: Option<i64>,
    #[serde(default)]
    pub football_association_id: Option<i64>,
}

/// A club together with the related rows that are persisted alongside it.
///
/// A related entity without an id is new and is only accepted when its relation cascades
/// persist. One with an id must already exist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClubAggregate {
    pub name: String,
    #[serde(default)]
    pub coach: Option<Coach>,
    #[serde(default)]
    pub football_association: Option<FootballAssociation>,
}
