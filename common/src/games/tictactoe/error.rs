use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Unsupported board size {size}, must be between {min} and {max}")]
    InvalidConfiguration { size: usize, min: usize, max: usize },
    #[error("Invalid move, {x}:{y} is out of bounds for a {size}x{size} board")]
    OutOfBounds { x: i64, y: i64, size: usize },
    #[error("Place {x}:{y} is occupied")]
    CellOccupied { x: usize, y: usize },
}

impl GameError {
    /// Rejected moves leave the engine untouched and may be retried.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::InvalidConfiguration { .. })
    }
}
