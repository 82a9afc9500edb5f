use std::collections::HashSet;

use async_trait::async_trait;

use roster_interface::errors::{AppError, Result};
use roster_interface::players::{
    model::{Player, PlayerRecord},
    service::PlayersService,
};

/// A fixed roster held in memory, loaded from a seed file or built in code.
#[derive(Clone, Default)]
pub struct InMemoryPlayersService {
    players: Vec<Player>,
}

impl InMemoryPlayersService {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Parses a json array of player records. Identifiers must be unique.
    pub fn from_json(raw: &str) -> Result<Self> {
        let records: Vec<PlayerRecord> =
            serde_json::from_str(raw).map_err(|e| AppError::ParseError { msg: e.to_string() })?;

        let players = records
            .into_iter()
            .map(PlayerRecord::into_player)
            .collect::<Result<Vec<Player>>>()?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = players.iter().find(|p| !seen.insert(p.id.as_str())) {
            return Err(AppError::malformed(&duplicate.id, "duplicated identifier"));
        }

        Ok(Self::new(players))
    }

    pub async fn from_file(path: &str) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::ConfigError {
                msg: format!("could not read seed file '{}': {}", path, e),
            })?;

        let service = Self::from_json(&raw)?;
        tracing::info!("loaded {} players from '{}'", service.players.len(), path);

        Ok(service)
    }
}

#[async_trait]
impl PlayersService for InMemoryPlayersService {
    async fn get_players(&self) -> Result<Vec<Player>> {
        Ok(self.players.clone())
    }

    async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>> {
        Ok(self.players.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use roster_interface::players::model::POSITIONS;

    const SEED: &str = r#"[
        {
            "id": "1", "name": "Ana", "position": "Base", "age": "24", "height": "178",
            "number": 7, "team": "DevFlow", "imageUrl": "https://cdn/ana.png"
        },
        {
            "id": "2", "name": "Luis", "position": "Alero", "age": "31", "height": "201",
            "number": 12, "team": "DevFlow", "imageUrl": "https://cdn/luis.png",
            "videoUrl": "https://cdn/luis.mp4"
        }
    ]"#;

    #[tokio::test]
    async fn serves_seeded_players_in_order() {
        let service = InMemoryPlayersService::from_json(SEED).unwrap();

        let players = service.get_players().await.unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Ana");
        assert_eq!(players[1].name, "Luis");

        let luis = service.get_player_by_id("2").await.unwrap().unwrap();
        assert_eq!(luis.number, 12);
        assert!(service.get_player_by_id("3").await.unwrap().is_none());
    }

    #[test]
    fn rejects_duplicated_identifiers() {
        let seed = SEED.replace("\"id\": \"2\"", "\"id\": \"1\"");

        match InMemoryPlayersService::from_json(&seed) {
            Err(AppError::MalformedRecord { id, .. }) => assert_eq!(id, "1"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("duplicated ids accepted"),
        }
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            InMemoryPlayersService::from_json("{ not json"),
            Err(AppError::ParseError { .. })
        ));
    }

    #[tokio::test]
    async fn loads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let service = InMemoryPlayersService::from_file(file.path().to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(service.get_players().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn repository_seed_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/players.json");

        let players = InMemoryPlayersService::from_file(path)
            .await
            .unwrap()
            .get_players()
            .await
            .unwrap();

        assert_eq!(players.len(), 5);
        assert!(players
            .iter()
            .all(|p| POSITIONS.contains(&p.position.as_str())));
    }

    #[tokio::test]
    async fn missing_seed_file_is_a_config_error() {
        let result = InMemoryPlayersService::from_file("does/not/exist.json").await;
        assert!(matches!(result, Err(AppError::ConfigError { .. })));
    }
}
