mod board;
mod error;
mod game_state;
mod scoreboard;
mod shared;
mod types;
mod win_detector;

pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::GameError;
pub use game_state::{GameEngine, GameSnapshot};
pub use scoreboard::Scoreboard;
pub use shared::SharedGame;
pub use types::{Mark, MoveOutcome, Player, Position, WinningLine};
pub use win_detector::{check_win, is_winning_move, winning_line};
