use chrono::NaiveDate;

use crate::modules::league::core::club::ClubAggregate;
use crate::modules::league::core::coach::Coach;
use crate::modules::league::core::football_association::FootballAssociation;
use crate::modules::league::core::football_competition::FootballCompetition;
use crate::modules::league::core::player::Player;
use crate::modules::league::core::ports::{LeagueError, LeagueRepository};

/// Populates an empty repository with one club, its coach, association, two players and a competition.
pub async fn seed_league(repository: &dyn LeagueRepository) -> Result<(), LeagueError> {
    let club = repository
        .save_club(ClubAggregate {
            name: "Real Betis".to_string(),
            coach: Some(Coach {
                id: None,
                name: "Manuel".to_string(),
                last_name: Some("Pellegrini".to_string()),
                nationality: Some("Chile".to_string()),
                age: Some(71),
            }),
            football_association: Some(FootballAssociation {
                id: None,
                name: "RFEF".to_string(),
                country: Some("Spain".to_string()),
                president: Some("Rafael Louzán".to_string()),
            }),
        })
        .await?;
    let club_id = club.id.ok_or(LeagueError::Constraint("club saved without an id".into()))?;

    for (name, last_name, age) in [("Isco", "Alarcón", 32), ("Pablo", "Fornals", 28)] {
        repository
            .save_player(Player {
                id: None,
                name: name.to_string(),
                last_name: Some(last_name.to_string()),
                age: Some(age),
                nationality: Some("Spain".to_string()),
                club_id: Some(club_id),
            })
            .await?;
    }

    let competition = repository
        .save_competition(FootballCompetition {
            id: None,
            name: "La Liga".to_string(),
            quantity_price: 100,
            start_date: NaiveDate::from_ymd_opt(2024, 8, 15),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 25),
        })
        .await?;
    if let Some(competition_id) = competition.id {
        repository.enroll(club_id, competition_id).await?;
    }
    tracing::info!(club_id, "league seeded");
    Ok(())
}
