use mnk_common::games::tictactoe::{Board, GameError, Player, Scoreboard, WinningLine};

use crate::config::DisplayConfig;

/// Receives what happens at the table. Implementations decide how (and
/// whether) to show it; the engine never prints.
pub trait GameReporter {
    fn game_started(&mut self, game_number: usize, board_size: usize);
    fn move_accepted(&mut self, player: Player, board: &Board);
    fn move_rejected(&mut self, player: Player, error: &GameError);
    fn round_won(&mut self, winner: Player, line: &WinningLine, final_board: &Board, scores: &Scoreboard);
    fn round_drawn(&mut self, final_board: &Board, scores: &Scoreboard);
}

pub struct ConsoleReporter {
    display: DisplayConfig,
}

impl ConsoleReporter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    fn print_board(&self, board: &Board) {
        if self.display.show_board {
            println!("{}", board);
            println!();
        }
    }

    fn print_scores(&self, scores: &Scoreboard) {
        if self.display.show_scores {
            println!("{}", format_scoreboard(scores));
            println!();
        }
    }
}

impl GameReporter for ConsoleReporter {
    fn game_started(&mut self, game_number: usize, board_size: usize) {
        println!("Game {} on a {}x{} board", game_number, board_size, board_size);
        println!();
    }

    fn move_accepted(&mut self, _player: Player, board: &Board) {
        self.print_board(board);
    }

    fn move_rejected(&mut self, _player: Player, error: &GameError) {
        println!("{}", rejection_message(error));
        println!();
    }

    fn round_won(&mut self, winner: Player, line: &WinningLine, final_board: &Board, scores: &Scoreboard) {
        self.print_board(final_board);
        println!("{}", format_win(winner, line));
        self.print_scores(scores);
    }

    fn round_drawn(&mut self, final_board: &Board, scores: &Scoreboard) {
        self.print_board(final_board);
        println!("Draw");
        self.print_scores(scores);
    }
}

pub fn format_scoreboard(scores: &Scoreboard) -> String {
    let mut lines = vec!["Score".to_string()];
    lines.extend(
        scores
            .iter()
            .map(|(player, score)| format!("{} with {}: {}", player, player.mark(), score)),
    );
    lines.join("\n")
}

pub fn format_win(winner: Player, line: &WinningLine) -> String {
    format!(
        "Player with {} wins!\n{} in a row from {}:{} to {}:{}",
        winner.mark(),
        line.cell_count(),
        line.start.x,
        line.start.y,
        line.end.x,
        line.end.y
    )
}

/// One line per offending coordinate for out-of-bounds moves.
pub fn rejection_message(error: &GameError) -> String {
    match error {
        GameError::OutOfBounds { x, y, size } => {
            let size = *size as i64;
            [x, y]
                .into_iter()
                .filter(|coord| !(0..size).contains(*coord))
                .map(|coord| format!("Invalid move, {} is out of bounds.", coord))
                .collect::<Vec<_>>()
                .join("\n")
        }
        GameError::CellOccupied { x, y } => format!("Place {}:{} is occupied.", x, y),
        GameError::InvalidConfiguration { .. } => error.to_string(),
    }
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ReportEvent {
    GameStarted { board_size: usize },
    Accepted(Player),
    Rejected(Player, GameError),
    Won(Player, WinningLine),
    Drawn,
}

#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

#[cfg(test)]
impl GameReporter for RecordingReporter {
    fn game_started(&mut self, _game_number: usize, board_size: usize) {
        self.events.push(ReportEvent::GameStarted { board_size });
    }

    fn move_accepted(&mut self, player: Player, _board: &Board) {
        self.events.push(ReportEvent::Accepted(player));
    }

    fn move_rejected(&mut self, player: Player, error: &GameError) {
        self.events.push(ReportEvent::Rejected(player, error.clone()));
    }

    fn round_won(&mut self, winner: Player, line: &WinningLine, _final_board: &Board, _scores: &Scoreboard) {
        self.events.push(ReportEvent::Won(winner, *line));
    }

    fn round_drawn(&mut self, _final_board: &Board, _scores: &Scoreboard) {
        self.events.push(ReportEvent::Drawn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_common::{GameEngine, MoveOutcome};

    #[test]
    fn test_scoreboard_text() {
        let mut engine = GameEngine::new(3).unwrap();
        for (x, y) in [(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)] {
            engine.attempt_move(x, y);
        }
        assert_eq!(
            format_scoreboard(engine.scores()),
            "Score\nplayer1 with x: 1\nplayer2 with o: 0"
        );
    }

    #[test]
    fn test_out_of_bounds_message_names_each_bad_coordinate() {
        let both = GameError::OutOfBounds { x: 5, y: -1, size: 3 };
        assert_eq!(
            rejection_message(&both),
            "Invalid move, 5 is out of bounds.\nInvalid move, -1 is out of bounds."
        );
        let one = GameError::OutOfBounds { x: 1, y: 3, size: 3 };
        assert_eq!(rejection_message(&one), "Invalid move, 3 is out of bounds.");
    }

    #[test]
    fn test_win_message_describes_the_line() {
        let mut engine = GameEngine::new(3).unwrap();
        let mut outcome = None;
        for (x, y) in [(1, 2), (0, 0), (2, 2), (1, 1), (0, 2)] {
            outcome = Some(engine.attempt_move(x, y));
        }
        let Some(MoveOutcome::Won { winner, line, .. }) = outcome else {
            panic!("expected a win, got {:?}", outcome);
        };
        assert_eq!(
            format_win(winner, &line),
            "Player with x wins!\n3 in a row from 0:2 to 2:2"
        );
    }

    #[test]
    fn test_occupied_message() {
        let error = GameError::CellOccupied { x: 1, y: 1 };
        assert_eq!(rejection_message(&error), "Place 1:1 is occupied.");
    }
}
