// Shared test fixtures for the league schema.

use crate::modules::league::core::club::ClubAggregate;
use crate::modules::league::core::coach::Coach;
use crate::modules::league::core::football_association::FootballAssociation;
use crate::modules::league::core::football_competition::FootballCompetition;
use crate::modules::league::core::player::Player;
use chrono::NaiveDate;

pub fn coach(name: &str) -> Coach {
    Coach {
        id: None,
        name: name.to_string(),
        last_name: None,
        nationality: None,
        age: None,
    }
}

pub fn association() -> FootballAssociation {
    FootballAssociation {
        id: None,
        name: "RFEF".to_string(),
        country: Some("Spain".to_string()),
        president: None,
    }
}

/// A new club with a new coach named "Manuel" and a new association, both cascaded.
pub fn club_aggregate(name: &str) -> ClubAggregate {
    ClubAggregate {
        name: name.to_string(),
        coach: Some(coach("Manuel")),
        football_association: Some(association()),
    }
}

pub fn player(name: &str, club_id: Option<i64>) -> Player {
    Player {
        id: None,
        name: name.to_string(),
        last_name: None,
        age: Some(25),
        nationality: None,
        club_id,
    }
}

pub fn competition(name: &str) -> FootballCompetition {
    FootballCompetition {
        id: None,
        name: name.to_string(),
        quantity_price: 10,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
    }
}
