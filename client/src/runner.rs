use mnk_common::games::SessionRng;
use mnk_common::games::tictactoe::{GameEngine, GameError, MoveOutcome, Scoreboard};
use mnk_common::log;

use crate::reporter::GameReporter;
use crate::script::MoveScript;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub board_size: usize,
    pub scores: Scoreboard,
    pub rounds_completed: u32,
    pub rejected_moves: usize,
}

impl MatchSummary {
    fn from_engine(engine: &GameEngine, rejected_moves: usize) -> Self {
        Self {
            board_size: engine.board_size(),
            scores: *engine.scores(),
            rounds_completed: engine.rounds_completed(),
            rejected_moves,
        }
    }
}

/// Replays every scripted game on its own engine.
pub fn run_script<R: GameReporter>(
    script: &MoveScript,
    reporter: &mut R,
) -> Result<Vec<MatchSummary>, GameError> {
    let mut summaries = Vec::with_capacity(script.games.len());

    for (index, game) in script.games.iter().enumerate() {
        let mut engine = GameEngine::new(game.board_size)?;
        reporter.game_started(index + 1, game.board_size);

        let mut rejected_moves = 0;
        for &[x, y] in &game.moves {
            if let MoveOutcome::Rejected(_) = play_move(&mut engine, x, y, reporter) {
                rejected_moves += 1;
            }
        }

        log!(
            "Game {} finished after {} round(s), {} rejected move(s)",
            index + 1,
            engine.rounds_completed(),
            rejected_moves
        );
        summaries.push(MatchSummary::from_engine(&engine, rejected_moves));
    }

    Ok(summaries)
}

/// Plays `rounds` complete rounds with both players picking uniformly among
/// the empty cells.
pub fn run_random<R: GameReporter>(
    board_size: usize,
    rounds: u32,
    rng: &mut SessionRng,
    reporter: &mut R,
) -> Result<MatchSummary, GameError> {
    let mut engine = GameEngine::new(board_size)?;
    reporter.game_started(1, board_size);
    log!("Random play with seed {}", rng.seed());

    while engine.rounds_completed() < rounds {
        let moves = engine.board().available_moves();
        let Some(target) = rng.choose(&moves).copied() else {
            break;
        };
        play_move(&mut engine, target.x as i64, target.y as i64, reporter);
    }

    Ok(MatchSummary::from_engine(&engine, 0))
}

fn play_move<R: GameReporter>(engine: &mut GameEngine, x: i64, y: i64, reporter: &mut R) -> MoveOutcome {
    let player = engine.current_player();
    let outcome = engine.attempt_move(x, y);

    match &outcome {
        MoveOutcome::Accepted { .. } => reporter.move_accepted(player, engine.board()),
        MoveOutcome::Rejected(error) => {
            log!("Rejected {} at {}:{}: {}", player, x, y, error);
            reporter.move_rejected(player, error);
        }
        MoveOutcome::Won {
            winner,
            line,
            final_board,
        } => {
            log!(
                "{} won round {} with a line from {}:{} to {}:{}",
                winner,
                engine.rounds_completed(),
                line.start.x,
                line.start.y,
                line.end.x,
                line.end.y
            );
            reporter.round_won(*winner, line, final_board, engine.scores());
        }
        MoveOutcome::Draw { final_board } => {
            log!("Round {} drawn", engine.rounds_completed());
            reporter.round_drawn(final_board, engine.scores());
        }
    }

    outcome
}
