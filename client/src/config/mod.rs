mod config;
mod game_config;

pub use config::{Config, get_config_manager};
pub use game_config::{DisplayConfig, GameConfig, RandomPlayConfig};
