use crate::modules::league::core::ports::{LeagueError, LeagueRepository};
use crate::modules::league::use_cases::load_club_roster::roster::ClubRoster;

/// Loads a club and walks each of its relations through the repository.
pub async fn load_club_roster(
    repository: &dyn LeagueRepository,
    club_id: i64,
) -> Result<ClubRoster, LeagueError> {
    let club = repository.load_club(club_id).await?;

    let coach = match club.coach_id {
        Some(id) => Some(repository.load_coach(id).await?),
        None => None,
    };
    let football_association = match club.football_association_id {
        Some(id) => Some(repository.load_association(id).await?),
        None => None,
    };
    let players = repository.players_of(club_id).await?;
    let football_competitions = repository.competitions_of(club_id).await?;

    Ok(ClubRoster {
        club,
        coach,
        football_association,
        players,
        football_competitions,
    })
}
