use mnk_common::config::Validate;
use mnk_common::games::tictactoe::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: usize,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(format!(
                "board_size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub show_board: bool,
    pub show_scores: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_scores: true,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RandomPlayConfig {
    pub rounds: u32,
    pub seed: Option<u64>,
}

impl Validate for RandomPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("random.rounds must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for RandomPlayConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            seed: None,
        }
    }
}
