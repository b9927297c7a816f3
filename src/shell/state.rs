use crate::modules::customers::core::customer::{Customer, seed_customers};
use crate::modules::league::adapters::outbound::league_in_memory::InMemoryLeague;
use crate::modules::league::core::ports::LeagueError;
use crate::modules::league::seed::seed_league;
use crate::modules::league::state::LeagueState;
use crate::modules::records::state::RecordsState;
use crate::modules::students::core::student::{Student, seed_students};
use crate::shared::inbound::response::ResponseStyle;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub customers: RecordsState<Customer>,
    pub students: RecordsState<Student>,
    pub league: LeagueState,
}

impl AppState {
    /// In-memory state with every dataset seeded.
    pub async fn seeded(style: ResponseStyle) -> Result<Self, LeagueError> {
        let league = Arc::new(InMemoryLeague::new());
        seed_league(&*league).await?;
        Ok(Self {
            customers: RecordsState::in_memory(seed_customers(), style),
            students: RecordsState::in_memory(seed_students(), style),
            league: LeagueState { repository: league },
        })
    }
}
