use crate::modules::league::core::ports::LeagueError;
use serde::{Deserialize, Serialize};

pub const COACH_NAME_MAX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

impl Coach {
    /// Strips surrounding whitespace from `name`, the form that is checked and stored.
    pub fn trimmed(self) -> Self {
        Coach {
            name: self.name.trim().to_string(),
            ..self
        }
    }

    /// Column rules for `name`: required and at most ten characters. Uniqueness is checked by the repository.
    pub fn check_columns(&self) -> Result<(), LeagueError> {
        let len = self.name.chars().count();
        if self.name.trim().is_empty() {
            return Err(LeagueError::Constraint("coach name is required".into()));
        }
        if len > COACH_NAME_MAX_LEN {
            return Err(LeagueError::Constraint(format!(
                "coach name exceeds {COACH_NAME_MAX_LEN} characters"
            )));
        }
        Ok(())
    }
}
