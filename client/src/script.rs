use std::path::Path;

use mnk_common::config::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};
use mnk_common::games::tictactoe::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Move script {0} does not exist")]
    NotFound(String),
    #[error(transparent)]
    Load(#[from] ConfigError),
    #[error("Invalid move script: {0}")]
    Invalid(String),
}

/// Sequence of games to replay, each on a fresh engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveScript {
    pub games: Vec<ScriptedGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedGame {
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    pub moves: Vec<[i64; 2]>,
}

fn default_board_size() -> usize {
    MIN_BOARD_SIZE
}

impl ScriptedGame {
    pub fn new(board_size: usize, moves: &[(i64, i64)]) -> Self {
        Self {
            board_size,
            moves: moves.iter().map(|&(x, y)| [x, y]).collect(),
        }
    }
}

impl Validate for MoveScript {
    fn validate(&self) -> Result<(), String> {
        if self.games.is_empty() {
            return Err("script contains no games".to_string());
        }
        for (index, game) in self.games.iter().enumerate() {
            if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&game.board_size) {
                return Err(format!(
                    "game {} has board_size {}, must be between {} and {}",
                    index + 1,
                    game.board_size,
                    MIN_BOARD_SIZE,
                    MAX_BOARD_SIZE
                ));
            }
        }
        Ok(())
    }
}

impl MoveScript {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let provider = FileContentConfigProvider::new(path);
        let content = provider
            .get_config_content()?
            .ok_or_else(|| ScriptError::NotFound(path.display().to_string()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let script: MoveScript = YamlConfigSerializer::new().deserialize(content)?;
        script.validate().map_err(ScriptError::Invalid)?;
        Ok(script)
    }

    /// Demonstration matches: a bottom-row win with an occupied-cell retry
    /// followed by a second round on the same board, a main diagonal, an
    /// anti-diagonal, a win for the second player, a draw and five in a row
    /// on a 5x5 board.
    pub fn demo() -> Self {
        Self {
            games: vec![
                ScriptedGame::new(
                    3,
                    &[
                        (1, 2),
                        (0, 0),
                        (2, 2),
                        (1, 1),
                        (1, 1),
                        (0, 2),
                        (0, 1),
                        (1, 0),
                        (2, 1),
                        (0, 0),
                        (1, 1),
                    ],
                ),
                ScriptedGame::new(3, &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)]),
                ScriptedGame::new(3, &[(2, 0), (1, 0), (1, 1), (0, 1), (0, 2)]),
                ScriptedGame::new(
                    3,
                    &[(2, 0), (1, 1), (1, 0), (0, 1), (0, 2), (0, 0), (1, 2), (2, 2)],
                ),
                ScriptedGame::new(
                    3,
                    &[
                        (1, 1),
                        (2, 0),
                        (1, 0),
                        (0, 1),
                        (0, 2),
                        (0, 0),
                        (2, 2),
                        (1, 2),
                        (2, 1),
                    ],
                ),
                ScriptedGame::new(
                    5,
                    &[
                        (0, 2),
                        (0, 1),
                        (1, 2),
                        (1, 1),
                        (2, 2),
                        (2, 1),
                        (3, 2),
                        (3, 1),
                        (4, 2),
                    ],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_script_is_valid() {
        let script = MoveScript::demo();
        assert!(script.validate().is_ok());
        assert_eq!(script.games.len(), 6);
        assert_eq!(script.games[5].board_size, 5);
    }

    #[test]
    fn test_parse_uses_default_board_size() {
        let script = MoveScript::parse(
            r#"
games:
  - moves: [[0, 0], [1, 1]]
  - board_size: 4
    moves:
      - [3, 3]
"#,
        )
        .unwrap();
        assert_eq!(script.games[0].board_size, 3);
        assert_eq!(script.games[0].moves, vec![[0, 0], [1, 1]]);
        assert_eq!(script.games[1].board_size, 4);
    }

    #[test]
    fn test_parse_rejects_small_boards_and_empty_scripts() {
        assert!(matches!(
            MoveScript::parse("games:\n  - board_size: 2\n    moves: []\n"),
            Err(ScriptError::Invalid(_))
        ));
        assert!(matches!(
            MoveScript::parse("games:\n  - board_size: 8589934592\n    moves: []\n"),
            Err(ScriptError::Invalid(_))
        ));
        assert!(matches!(
            MoveScript::parse("games: []\n"),
            Err(ScriptError::Invalid(_))
        ));
    }

    #[test]
    fn test_negative_coordinates_are_kept_for_the_engine_to_reject() {
        let script = MoveScript::parse("games:\n  - moves: [[-1, 0]]\n").unwrap();
        assert_eq!(script.games[0].moves, vec![[-1, 0]]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = MoveScript::load(Path::new("no_such_mnk_script.yaml"));
        assert!(matches!(result, Err(ScriptError::NotFound(_))));
    }
}
