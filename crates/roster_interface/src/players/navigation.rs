use serde::Serialize;

use crate::players::model::Player;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerLookup<'a> {
    pub index: usize, // Position of the player in the fetched roster.
    pub player: &'a Player,
}

/// Finds the first player with the given identifier.
///
/// A `None` means the caller should send the user back to the roster root.
pub fn find_player<'a>(players: &'a [Player], id: &str) -> Option<PlayerLookup<'a>> {
    players
        .iter()
        .position(|player| player.id == id)
        .map(|index| PlayerLookup {
            index,
            player: &players[index],
        })
}

/// Position inside a roster of `len` players, moving without wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterCursor {
    index: usize,
    len: usize,
}

impl RosterCursor {
    pub fn new(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index, len })
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.has_previous().then(|| self.index - 1)
    }

    pub fn next_index(&self) -> Option<usize> {
        self.has_next().then(|| self.index + 1)
    }

    pub fn step(&self, step: Step) -> Option<usize> {
        match step {
            Step::Previous => self.previous_index(),
            Step::Next => self.next_index(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    pub player: Player,
    pub index: usize,
    pub total: usize,
    pub previous_id: Option<String>, // None when "previous" is disabled.
    pub next_id: Option<String>,     // None when "next" is disabled.
}

impl PlayerDetail {
    pub fn from_roster(players: &[Player], id: &str) -> Option<Self> {
        let lookup = find_player(players, id)?;
        let cursor = RosterCursor::new(lookup.index, players.len())?;

        Some(Self {
            player: lookup.player.clone(),
            index: lookup.index,
            total: players.len(),
            previous_id: cursor.previous_index().map(|i| players[i].id.clone()),
            next_id: cursor.next_index().map(|i| players[i].id.clone()),
        })
    }
}

/// Player reached by one navigation step from `id`.
///
/// Returns `None` when `id` is not in the roster. A disabled step returns
/// the current player.
pub fn neighbor<'a>(players: &'a [Player], id: &str, step: Step) -> Option<&'a Player> {
    let lookup = find_player(players, id)?;
    let cursor = RosterCursor::new(lookup.index, players.len())?;

    match cursor.step(step) {
        Some(index) => players.get(index),
        None => Some(lookup.player),
    }
}
