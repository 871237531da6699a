use super::board::Board;
use super::types::{Mark, Position, WinningLine};

type Step = (isize, isize);

/// Opposite direction pairs through a cell: main diagonal, anti-diagonal,
/// horizontal, vertical. The first direction of each pair heads towards the
/// top (or the left edge for the horizontal axis).
const AXES: [(Step, Step); 4] = [
    ((-1, -1), (1, 1)),
    ((1, -1), (-1, 1)),
    ((-1, 0), (1, 0)),
    ((0, -1), (0, 1)),
];

/// Checks only the four lines through the freshly played `(x, y)`.
///
/// Each directional run starts at `(x, y)` itself and is capped by the
/// distance to the board edge, so the two runs of an axis overlap in the
/// played cell and the line length is `run_a + run_b - 1`. A win requires
/// that length to equal `win_count` exactly.
pub fn winning_line(
    board: &Board,
    x: usize,
    y: usize,
    mark: Mark,
    win_count: usize,
) -> Option<WinningLine> {
    if mark == Mark::Empty || x >= board.size() || y >= board.size() {
        return None;
    }
    if board.mark_at(x, y) != mark {
        return None;
    }

    for (towards_start, towards_end) in AXES {
        let start_run = count_run(board, x, y, towards_start, mark);
        let end_run = count_run(board, x, y, towards_end, mark);

        if start_run + end_run - 1 == win_count {
            let start = walk(x, y, towards_start, start_run - 1);
            let end = walk(x, y, towards_end, end_run - 1);
            return Some(WinningLine::new(mark, start, end));
        }
    }

    None
}

pub fn is_winning_move(board: &Board, x: usize, y: usize, mark: Mark, win_count: usize) -> bool {
    winning_line(board, x, y, mark, win_count).is_some()
}

/// Full-board scan for any run of `win_count` equal marks. Quadratic in the
/// board side; the engine never calls it.
pub fn check_win(board: &Board, win_count: usize) -> Option<Mark> {
    let size = board.size();
    if win_count == 0 || win_count > size {
        return None;
    }

    for y in 0..size {
        for x in 0..size {
            let mark = board.mark_at(x, y);
            if mark == Mark::Empty {
                continue;
            }

            for (_, step) in AXES {
                if edge_distance(size, x, y, step) < win_count {
                    continue;
                }
                if (0..win_count).all(|i| {
                    let pos = walk(x, y, step, i);
                    board.mark_at(pos.x, pos.y) == mark
                }) {
                    return Some(mark);
                }
            }
        }
    }

    None
}

fn count_run(board: &Board, x: usize, y: usize, step: Step, mark: Mark) -> usize {
    let limit = edge_distance(board.size(), x, y, step);
    let mut run = 0;
    for i in 0..limit {
        let pos = walk(x, y, step, i);
        if board.mark_at(pos.x, pos.y) != mark {
            break;
        }
        run += 1;
    }
    run
}

/// Number of cells from `(x, y)` (inclusive) to the board edge along `step`.
fn edge_distance(size: usize, x: usize, y: usize, (dx, dy): Step) -> usize {
    let along = |coord: usize, d: isize| match d {
        d if d < 0 => coord + 1,
        d if d > 0 => size - coord,
        _ => size,
    };
    along(x, dx).min(along(y, dy))
}

fn walk(x: usize, y: usize, (dx, dy): Step, steps: usize) -> Position {
    let steps = steps as isize;
    Position::new(
        (x as isize + dx * steps) as usize,
        (y as isize + dy * steps) as usize,
    )
}
