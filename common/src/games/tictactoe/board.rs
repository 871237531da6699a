use std::fmt;

use super::error::GameError;
use super::types::{Mark, Position};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 1024;

/// Square grid of marks stored row-major. The side length is fixed at
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        let invalid = GameError::InvalidConfiguration {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        };
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(invalid);
        }
        let cell_count = size.checked_mul(size).ok_or(invalid)?;

        Ok(Self {
            cells: vec![Mark::Empty; cell_count],
            size,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let mark = match ch {
                    'x' => Mark::X,
                    'o' => Mark::O,
                    _ => Mark::Empty,
                };
                board.set(x, y, mark).unwrap();
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    pub fn is_in_bounds(&self, x: i64, y: i64) -> bool {
        let size = self.size as i64;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Mark, GameError> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), GameError> {
        let index = self.index(x, y)?;
        self.cells[index] = mark;
        Ok(())
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> Result<bool, GameError> {
        Ok(self.get(x, y)? != Mark::Empty)
    }

    /// Unchecked read for scans that already clamped their range to the board.
    pub(crate) fn mark_at(&self, x: usize, y: usize) -> Mark {
        self.cells[y * self.size + x]
    }

    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(i, _)| Position::new(i % self.size, i / self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    pub fn rows(&self) -> Vec<Vec<Mark>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// Text snapshot, top row first, cells separated by a space.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|mark| mark.as_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GameError> {
        if x >= self.size || y >= self.size {
            return Err(GameError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: vec![Mark::Empty; MIN_BOARD_SIZE * MIN_BOARD_SIZE],
            size: MIN_BOARD_SIZE,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
