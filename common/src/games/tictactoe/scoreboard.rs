use serde::{Deserialize, Serialize};

use super::types::Player;

/// Wins per player. Survives round resets for the lifetime of an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: [u32; 2],
}

impl Scoreboard {
    pub fn score(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
    }

    pub fn total(&self) -> u32 {
        self.wins.iter().sum()
    }

    pub fn leader(&self) -> Option<Player> {
        match self.wins[0].cmp(&self.wins[1]) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::ALL.into_iter().map(|player| (player, self.score(player)))
    }
}
