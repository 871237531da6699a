pub mod config;
pub mod games;
pub mod logger;

pub use games::tictactoe::{GameEngine, GameError, MoveOutcome, Player};
