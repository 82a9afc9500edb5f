use serde::{Deserialize, Serialize};

use crate::players::model::Player;

/// Search text and selected position of the roster screen.
///
/// Both fields default to empty, which means "no constraint".
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    pub position: String,
}

impl FilterCriteria {
    pub fn new(query: &str, position: &str) -> Self {
        Self {
            query: query.to_string(),
            position: position.to_string(),
        }
    }

    pub fn matches(&self, player: &Player) -> bool {
        player_matches(player, &self.query.to_lowercase(), &self.position)
    }

    pub fn apply(&self, players: &[Player]) -> Vec<Player> {
        filter_players(players, &self.query, &self.position)
    }

    /// Selecting the position already active clears the position filter.
    pub fn toggle_position(&mut self, position: &str) {
        if self.position == position {
            self.position.clear();
        } else {
            self.position = position.to_string();
        }
    }

    /// The criteria a tap on the `position` chip would produce.
    pub fn toggled(&self, position: &str) -> Self {
        let mut criteria = self.clone();
        criteria.toggle_position(position);
        criteria
    }
}

fn player_matches(player: &Player, lowercase_query: &str, position: &str) -> bool {
    player.name.to_lowercase().contains(lowercase_query)
        && (position.is_empty() || player.position == position)
}

/// Keeps, in their original order, the players whose name contains `query`
/// (case-insensitive) and whose position equals `position` when one is given.
pub fn filter_players(players: &[Player], query: &str, position: &str) -> Vec<Player> {
    let query = query.to_lowercase();

    players
        .iter()
        .filter(|player| player_matches(player, &query, position))
        .cloned()
        .collect()
}
