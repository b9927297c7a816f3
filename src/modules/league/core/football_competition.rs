use crate::modules::league::core::ports::LeagueError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootballCompetition {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub quantity_price: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl FootballCompetition {
    pub fn check_dates(&self) -> Result<(), LeagueError> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if end < start => Err(LeagueError::Constraint(format!(
                "competition {} ends before it starts",
                self.name
            ))),
            _ => Ok(()),
        }
    }
}
