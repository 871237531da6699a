use serde::{Deserialize, Serialize};

use super::board::{Board, MIN_BOARD_SIZE};
use super::error::GameError;
use super::scoreboard::Scoreboard;
use super::types::{Mark, MoveOutcome, Player};
use super::win_detector::winning_line;

/// Rounds of m,n,k tic-tac-toe with m = n = k between two fixed players.
///
/// The winning run length always equals the board side, so a 5x5 board needs
/// five in a row. A terminal move (win or draw) immediately clears the board
/// for the next round; scores persist. Whoever made the terminal move opens
/// the next round.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    symbols_to_win: usize,
    turns_played: usize,
    current_player: Player,
    scores: Scoreboard,
    rounds_completed: u32,
}

impl GameEngine {
    pub fn new(board_size: usize) -> Result<Self, GameError> {
        let board = Board::new(board_size)?;
        Ok(Self {
            symbols_to_win: board.size(),
            board,
            turns_played: 0,
            current_player: Player::One,
            scores: Scoreboard::default(),
            rounds_completed: 0,
        })
    }

    /// Places the current player's mark at `(x, y)`.
    ///
    /// Out-of-bounds and occupied targets come back as
    /// [`MoveOutcome::Rejected`] with the engine untouched.
    pub fn attempt_move(&mut self, x: i64, y: i64) -> MoveOutcome {
        self.try_move(x, y).unwrap_or_else(MoveOutcome::Rejected)
    }

    pub fn try_move(&mut self, x: i64, y: i64) -> Result<MoveOutcome, GameError> {
        let (x, y) = self.validate_move(x, y)?;
        let player = self.current_player;
        let mark = player.mark();

        self.board.set(x, y, mark)?;
        self.turns_played += 1;

        if let Some(line) = winning_line(&self.board, x, y, mark, self.symbols_to_win) {
            self.scores.record_win(player);
            let final_board = self.start_new_round();
            return Ok(MoveOutcome::Won {
                winner: player,
                line,
                final_board,
            });
        }

        if self.turns_played == self.board.cell_count() {
            let final_board = self.start_new_round();
            return Ok(MoveOutcome::Draw { final_board });
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Accepted {
            next: self.current_player,
        })
    }

    fn validate_move(&self, x: i64, y: i64) -> Result<(usize, usize), GameError> {
        if !self.board.is_in_bounds(x, y) {
            return Err(GameError::OutOfBounds {
                x,
                y,
                size: self.board.size(),
            });
        }

        let (x, y) = (x as usize, y as usize);
        if self.board.is_occupied(x, y)? {
            return Err(GameError::CellOccupied { x, y });
        }
        Ok((x, y))
    }

    /// Clears the board for the next round and hands back the finished one.
    fn start_new_round(&mut self) -> Board {
        let final_board = self.board.clone();
        self.board.clear();
        self.turns_played = 0;
        self.rounds_completed += 1;
        final_board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn render(&self) -> String {
        self.board.render()
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn symbols_to_win(&self) -> usize {
        self.symbols_to_win
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board_size: self.board.size(),
            symbols_to_win: self.symbols_to_win,
            rows: self.board.rows(),
            turns_played: self.turns_played,
            current_player: self.current_player,
            scores: self.scores,
            rounds_completed: self.rounds_completed,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self {
            board: Board::default(),
            symbols_to_win: MIN_BOARD_SIZE,
            turns_played: 0,
            current_player: Player::One,
            scores: Scoreboard::default(),
            rounds_completed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board_size: usize,
    pub symbols_to_win: usize,
    pub rows: Vec<Vec<Mark>>,
    pub turns_played: usize,
    pub current_player: Player,
    pub scores: Scoreboard,
    pub rounds_completed: u32,
}
