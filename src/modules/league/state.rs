use crate::modules::league::core::ports::LeagueRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct LeagueState {
    pub repository: Arc<dyn LeagueRepository>,
}
