use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn as_char(&self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the two seats at the table. Each seat owns a fixed mark for the
/// lifetime of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::One => Mark::X,
            Player::Two => Mark::O,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::One => "player1",
            Player::Two => "player2",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// End points of the run that completed a win, `start` being the end reached
/// by walking towards the top (or the left for horizontal lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }

    pub fn cell_count(&self) -> usize {
        self.start.x.abs_diff(self.end.x).max(self.start.y.abs_diff(self.end.y)) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed, the round goes on with `next` to move.
    Accepted { next: Player },
    /// Nothing changed; the same player may try again.
    Rejected(GameError),
    /// The round ended with a completed line. The engine's board is already
    /// cleared; `final_board` is the position as it was won.
    Won {
        winner: Player,
        line: WinningLine,
        final_board: Board,
    },
    /// The board filled up without a line. The engine's board is already cleared.
    Draw { final_board: Board },
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Draw { .. })
    }
}
