// Ports the league use cases need from a persistence collaborator.
//
// Responsibilities
// - Persist entities, assigning identity ids, and cascade persist along relations that allow it.
// - Resolve references one relation at a time.
//
// Testing guidance
// - InMemoryLeague implements this for tests and local development.

use crate::modules::league::core::club::{Club, ClubAggregate};
use crate::modules::league::core::coach::Coach;
use crate::modules::league::core::football_association::FootballAssociation;
use crate::modules::league::core::football_competition::FootballCompetition;
use crate::modules::league::core::player::Player;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("referenced {target} does not exist with id: {id}")]
    MissingReference { target: &'static str, id: i64 },

    #[error("constraint violated: {0}")]
    Constraint(String),
}

#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn save_club(&self, aggregate: ClubAggregate) -> Result<Club, LeagueError>;

    async fn save_player(&self, player: Player) -> Result<Player, LeagueError>;

    async fn save_competition(
        &self,
        competition: FootballCompetition,
    ) -> Result<FootballCompetition, LeagueError>;

    /// Adds a `club_competition` row. Enrolling twice is a no-op.
    async fn enroll(&self, club_id: i64, competition_id: i64) -> Result<(), LeagueError>;

    async fn load_club(&self, id: i64) -> Result<Club, LeagueError>;

    async fn load_coach(&self, id: i64) -> Result<Coach, LeagueError>;

    async fn load_association(&self, id: i64) -> Result<FootballAssociation, LeagueError>;

    async fn players_of(&self, club_id: i64) -> Result<Vec<Player>, LeagueError>;

    async fn competitions_of(&self, club_id: i64)
    -> Result<Vec<FootballCompetition>, LeagueError>;
}
