// In memory implementation of the LeagueRepository port.
//
// Purpose
// - Exercise the league use cases without a database.
//
// Responsibilities
// - Store one table per entity plus the club_competition join table.
// - Assign identity ids per table, starting at 1.
// - Validate a whole save before writing any row, so a rejected save leaves every table untouched.

use crate::modules::league::core::club::{Club, ClubAggregate};
use crate::modules::league::core::coach::Coach;
use crate::modules::league::core::football_association::FootballAssociation;
use crate::modules::league::core::football_competition::FootballCompetition;
use crate::modules::league::core::player::Player;
use crate::modules::league::core::ports::{LeagueError, LeagueRepository};
use crate::modules::league::core::relation::{CLUB_ASSOCIATION, CLUB_COACH, PLAYER_CLUB, Relation};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    clubs: BTreeMap<i64, Club>,
    coaches: BTreeMap<i64, Coach>,
    players: BTreeMap<i64, Player>,
    associations: BTreeMap<i64, FootballAssociation>,
    competitions: BTreeMap<i64, FootballCompetition>,
    club_competition: BTreeSet<(i64, i64)>,
    identity: HashMap<&'static str, i64>,
}

impl Tables {
    fn next_id(&mut self, table: &'static str) -> i64 {
        let id = self.identity.entry(table).or_insert(0);
        *id += 1;
        *id
    }

    fn persist_coach(&mut self, coach: Coach) -> i64 {
        if let Some(id) = coach.id {
            return id;
        }
        let id = self.next_id("coach");
        self.coaches.insert(
            id,
            Coach {
                id: Some(id),
                ..coach
            },
        );
        id
    }

    fn persist_association(&mut self, association: FootballAssociation) -> i64 {
        if let Some(id) = association.id {
            return id;
        }
        let id = self.next_id("football_association");
        self.associations.insert(
            id,
            FootballAssociation {
                id: Some(id),
                ..association
            },
        );
        id
    }

    fn check_coach(&self, coach: &Coach) -> Result<(), LeagueError> {
        check_reference(&self.coaches, coach.id, &CLUB_COACH)?;
        match coach.id {
            Some(id) => {
                if let Some(owner) = self.clubs.values().find(|c| c.coach_id == Some(id)) {
                    return Err(LeagueError::Constraint(format!(
                        "coach {id} already coaches {}",
                        owner.name
                    )));
                }
            }
            None => {
                coach.check_columns()?;
                if self.coaches.values().any(|c| c.name == coach.name) {
                    return Err(LeagueError::Constraint(format!(
                        "coach name {} is already taken",
                        coach.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A reference with an id must point at an existing row. A missing id is either a nullable
/// foreign key or a new entity persisted through a cascading relation.
fn check_reference<E>(
    table: &BTreeMap<i64, E>,
    id: Option<i64>,
    relation: &Relation,
) -> Result<(), LeagueError> {
    match id {
        Some(id) if !table.contains_key(&id) => Err(LeagueError::MissingReference {
            target: relation.target,
            id,
        }),
        _ => Ok(()),
    }
}

#[derive(Default)]
pub struct InMemoryLeague {
    tables: RwLock<Tables>,
}

impl InMemoryLeague {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl LeagueRepository for InMemoryLeague {
    async fn save_club(&self, aggregate: ClubAggregate) -> Result<Club, LeagueError> {
        let mut t = self.tables.write().await;
        let aggregate = ClubAggregate {
            coach: aggregate.coach.map(Coach::trimmed),
            ..aggregate
        };

        if aggregate.name.trim().is_empty() {
            return Err(LeagueError::Constraint("club name is required".into()));
        }
        if let Some(coach) = &aggregate.coach {
            t.check_coach(coach)?;
        }
        if let Some(association) = &aggregate.football_association {
            check_reference(&t.associations, association.id, &CLUB_ASSOCIATION)?;
        }

        let coach_id = aggregate.coach.map(|c| t.persist_coach(c));
        let football_association_id = aggregate
            .football_association
            .map(|a| t.persist_association(a));
        let id = t.next_id("club");
        let club = Club {
            id: Some(id),
            name: aggregate.name,
            coach_id,
            football_association_id,
        };
        t.clubs.insert(id, club.clone());
        tracing::debug!(club_id = id, ?coach_id, ?football_association_id, "club saved");
        Ok(club)
    }

    async fn save_player(&self, player: Player) -> Result<Player, LeagueError> {
        let mut t = self.tables.write().await;
        check_reference(&t.clubs, player.club_id, &PLAYER_CLUB)?;
        let id = t.next_id("player");
        let player = Player {
            id: Some(id),
            ..player
        };
        t.players.insert(id, player.clone());
        Ok(player)
    }

    async fn save_competition(
        &self,
        competition: FootballCompetition,
    ) -> Result<FootballCompetition, LeagueError> {
        competition.check_dates()?;
        let mut t = self.tables.write().await;
        let id = t.next_id("football_competition");
        let competition = FootballCompetition {
            id: Some(id),
            ..competition
        };
        t.competitions.insert(id, competition.clone());
        Ok(competition)
    }

    async fn enroll(&self, club_id: i64, competition_id: i64) -> Result<(), LeagueError> {
        let mut t = self.tables.write().await;
        if !t.clubs.contains_key(&club_id) {
            return Err(LeagueError::NotFound {
                entity: "Club",
                id: club_id,
            });
        }
        if !t.competitions.contains_key(&competition_id) {
            return Err(LeagueError::NotFound {
                entity: "FootballCompetition",
                id: competition_id,
            });
        }
        t.club_competition.insert((club_id, competition_id));
        Ok(())
    }

    async fn load_club(&self, id: i64) -> Result<Club, LeagueError> {
        self.tables
            .read()
            .await
            .clubs
            .get(&id)
            .cloned()
            .ok_or(LeagueError::NotFound { entity: "Club", id })
    }

    async fn load_coach(&self, id: i64) -> Result<Coach, LeagueError> {
        self.tables
            .read()
            .await
            .coaches
            .get(&id)
            .cloned()
            .ok_or(LeagueError::NotFound {
                entity: "Coach",
                id,
            })
    }

    async fn load_association(&self, id: i64) -> Result<FootballAssociation, LeagueError> {
        self.tables
            .read()
            .await
            .associations
            .get(&id)
            .cloned()
            .ok_or(LeagueError::NotFound {
                entity: "FootballAssociation",
                id,
            })
    }

    async fn players_of(&self, club_id: i64) -> Result<Vec<Player>, LeagueError> {
        let t = self.tables.read().await;
        if !t.clubs.contains_key(&club_id) {
            return Err(LeagueError::NotFound {
                entity: "Club",
                id: club_id,
            });
        }
        Ok(t.players
            .values()
            .filter(|p| p.club_id == Some(club_id))
            .cloned()
            .collect())
    }

    async fn competitions_of(
        &self,
        club_id: i64,
    ) -> Result<Vec<FootballCompetition>, LeagueError> {
        let t = self.tables.read().await;
        if !t.clubs.contains_key(&club_id) {
            return Err(LeagueError::NotFound {
                entity: "Club",
                id: club_id,
            });
        }
        Ok(t.club_competition
            .range((club_id, i64::MIN)..=(club_id, i64::MAX))
            .filter_map(|(_, competition_id)| t.competitions.get(competition_id))
            .cloned()
            .collect())
    }
}
