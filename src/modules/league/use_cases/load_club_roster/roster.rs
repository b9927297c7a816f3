use crate::modules::league::core::club::Club;
use crate::modules::league::core::coach::Coach;
use crate::modules::league::core::football_association::FootballAssociation;
use crate::modules::league::core::football_competition::FootballCompetition;
use crate::modules::league::core::player::Player;
use serde::Serialize;

/// A club with every relation resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubRoster {
    pub club: Club,
    pub coach: Option<Coach>,
    pub football_association: Option<FootballAssociation>,
    pub players: Vec<Player>,
    pub football_competitions: Vec<FootballCompetition>,
}
