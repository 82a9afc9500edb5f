use serde::Serialize;

use crate::errors::Result;
use crate::players::filter::FilterCriteria;
use crate::players::model::{Player, POSITIONS};
use crate::players::service::PlayersServiceHandle;

pub const NO_PLAYERS_FOUND: &str = "No se encontraron jugadores.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionChip {
    pub label: String,
    pub active: bool,
    pub toggle: FilterCriteria, // Criteria obtained by tapping this chip.
}

/// The visible part of the roster for one set of filter criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterView {
    pub players: Vec<Player>,
    pub total: usize, // Size of the unfiltered roster.
    pub criteria: FilterCriteria,
    pub chips: Vec<PositionChip>,
    pub empty_message: Option<String>,
}

impl RosterView {
    pub fn new(roster: &[Player], criteria: FilterCriteria) -> Self {
        let players = criteria.apply(roster);

        let chips = POSITIONS
            .iter()
            .map(|label| PositionChip {
                label: label.to_string(),
                active: criteria.position == *label,
                toggle: criteria.toggled(label),
            })
            .collect();

        let empty_message = players.is_empty().then(|| NO_PLAYERS_FOUND.to_string());

        Self {
            players,
            total: roster.len(),
            criteria,
            chips,
            empty_message,
        }
    }

    /// Fetches the roster once and filters it in memory.
    pub async fn load(
        players_service: &PlayersServiceHandle,
        criteria: FilterCriteria,
    ) -> Result<Self> {
        let roster = players_service.get_players().await?;

        tracing::debug!(
            "roster fetched: {} players, query '{}', position '{}'",
            roster.len(),
            criteria.query,
            criteria.position
        );

        Ok(Self::new(&roster, criteria))
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::errors::AppError;
    use crate::players::service::PlayersService;

    struct FixedPlayers(Vec<Player>);

    #[async_trait]
    impl PlayersService for FixedPlayers {
        async fn get_players(&self) -> Result<Vec<Player>> {
            Ok(self.0.clone())
        }

        async fn get_player_by_id(&self, id: &str) -> Result<Option<Player>> {
            Ok(self.0.iter().find(|p| p.id == id).cloned())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl PlayersService for Unreachable {
        async fn get_players(&self) -> Result<Vec<Player>> {
            Err(AppError::MongoError {
                msg: "server selection timeout".to_string(),
            })
        }

        async fn get_player_by_id(&self, _id: &str) -> Result<Option<Player>> {
            Err(AppError::MongoError {
                msg: "server selection timeout".to_string(),
            })
        }
    }

    fn player(id: &str, name: &str, position: &str) -> Player {
        Player {
            id: id.to_string(),
            name: name.to_string(),
            position: position.to_string(),
            age: "22".to_string(),
            height: "185".to_string(),
            number: 4,
            team: "DevFlow".to_string(),
            image_url: String::new(),
            video_url: None,
        }
    }

    #[test]
    fn chips_reflect_active_position() {
        let roster = vec![player("1", "Ana", "Base"), player("2", "Luis", "Alero")];
        let view = RosterView::new(&roster, FilterCriteria::new("", "Alero"));

        assert_eq!(view.total, 2);
        assert_eq!(view.players.len(), 1);
        assert_eq!(view.chips.len(), POSITIONS.len());

        let alero = view.chips.iter().find(|c| c.label == "Alero").unwrap();
        assert!(alero.active);
        assert_eq!(alero.toggle.position, "");

        let base = view.chips.iter().find(|c| c.label == "Base").unwrap();
        assert!(!base.active);
        assert_eq!(base.toggle.position, "Base");
    }

    #[test]
    fn empty_result_carries_message() {
        let roster = vec![player("1", "Ana", "Base")];
        let view = RosterView::new(&roster, FilterCriteria::new("zz", ""));

        assert!(view.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(NO_PLAYERS_FOUND));
    }

    #[test]
    fn serializes_camel_case() {
        let view = RosterView::new(&[], FilterCriteria::default());

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["emptyMessage"], NO_PLAYERS_FOUND);
        assert!(value.get("empty_message").is_none());
    }

    #[tokio::test]
    async fn load_fetches_then_filters() {
        let service: PlayersServiceHandle = Arc::new(FixedPlayers(vec![
            player("1", "Ana", "Base"),
            player("2", "Luis", "Alero"),
        ]));

        let view = RosterView::load(&service, FilterCriteria::new("an", ""))
            .await
            .unwrap();

        assert_eq!(view.players.len(), 1);
        assert_eq!(view.players[0].id, "1");
        assert_eq!(view.empty_message, None);
    }

    #[tokio::test]
    async fn load_propagates_store_failure() {
        let service: PlayersServiceHandle = Arc::new(Unreachable);

        let err = RosterView::load(&service, FilterCriteria::default())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
    }
}
