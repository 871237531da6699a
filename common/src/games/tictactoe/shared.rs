use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::error::GameError;
use super::game_state::{GameEngine, GameSnapshot};
use super::scoreboard::Scoreboard;
use super::types::MoveOutcome;

/// Cloneable handle for submitting moves from several threads. The lock is
/// held for a whole move, from validation to round reset.
#[derive(Clone, Debug)]
pub struct SharedGame {
    engine: Arc<Mutex<GameEngine>>,
}

impl SharedGame {
    pub fn new(board_size: usize) -> Result<Self, GameError> {
        Ok(Self::from_engine(GameEngine::new(board_size)?))
    }

    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn attempt_move(&self, x: i64, y: i64) -> MoveOutcome {
        self.lock().attempt_move(x, y)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    pub fn scores(&self) -> Scoreboard {
        *self.lock().scores()
    }

    // A move never panics halfway through, so a poisoned engine is still consistent.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;
    use std::thread;

    #[test]
    fn test_concurrent_moves_are_serialized() {
        let game = SharedGame::new(8).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let game = game.clone();
                thread::spawn(move || {
                    (0..16)
                        .map(|i| {
                            let cell = worker * 16 + i;
                            game.attempt_move(cell % 8, cell / 8)
                        })
                        .filter(|o| !matches!(o, MoveOutcome::Rejected(_)))
                        .count()
                })
            })
            .collect();

        let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let snapshot = game.snapshot();
        let filled = snapshot
            .rows
            .iter()
            .flatten()
            .filter(|&&m| m != crate::games::tictactoe::Mark::Empty)
            .count();
        let rounds = snapshot.rounds_completed as usize;

        assert!(accepted >= filled);
        assert_eq!(snapshot.turns_played, filled);
        if rounds == 0 {
            assert_eq!(accepted, filled);
        }
    }

    #[test]
    fn test_shared_handle_sees_same_scores() {
        let game = SharedGame::new(3).unwrap();
        let other = game.clone();
        for (x, y) in [(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)] {
            other.attempt_move(x, y);
        }
        assert_eq!(game.scores().score(Player::One), 1);
    }
}
