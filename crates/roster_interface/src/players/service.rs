use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::players::model::Player;

/// Read access to the `players` collection of the document store.
#[async_trait]
pub trait PlayersService {
    async fn get_players(&self) -> Result<Vec<Player>>;
    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>>;
}

pub type PlayersServiceHandle = Arc<dyn PlayersService + Send + Sync>;
