//! Win detection and line measurement
//!
//! A mark wins once it holds `win_streak` consecutive cells along a row, a
//! column, or either diagonal. Each direction is scanned line by line with a
//! consecutive-match counter that resets on any other cell.

use crate::board::{Board, Mark, Pos, DIRECTIONS};

/// Check whether `mark` has a run of at least `win_streak` cells on `board`.
///
/// `Empty` never wins, and neither does anything with a zero streak.
pub fn has_won(board: &Board, mark: Mark, win_streak: usize) -> bool {
    if mark.is_empty() || win_streak == 0 {
        return false;
    }

    DIRECTIONS.iter().any(|&dir| {
        line_starts(board, dir).any(|start| scan_line(board, start, dir, mark, win_streak))
    })
}

/// Length of the line `mark` would form through `pos` if placed there.
///
/// Counts outward in both senses of each direction and returns the longest
/// result, so the minimum is 1.
pub fn line_length(board: &Board, pos: Pos, mark: Mark) -> usize {
    DIRECTIONS
        .iter()
        .map(|&dir| 1 + run_from(board, pos, dir, 1, mark) + run_from(board, pos, dir, -1, mark))
        .max()
        .unwrap_or(1)
}

/// First cell of every line running in `dir`: the cells whose predecessor is off the board
fn line_starts(board: &Board, dir: (i32, i32)) -> impl Iterator<Item = Pos> + '_ {
    board
        .positions()
        .filter(move |&pos| !board.contains(pos.offset(dir, -1)))
}

/// Walk one line from `start` to the edge, stopping as soon as the streak is reached
fn scan_line(board: &Board, start: Pos, dir: (i32, i32), mark: Mark, win_streak: usize) -> bool {
    let mut consecutive = 0;
    let mut pos = start;

    while board.contains(pos) {
        if board.get(pos) == mark {
            consecutive += 1;
            if consecutive >= win_streak {
                return true;
            }
        } else {
            consecutive = 0;
        }
        pos = pos.offset(dir, 1);
    }

    false
}

/// Count matching cells stepping away from `pos` (exclusive)
fn run_from(board: &Board, pos: Pos, dir: (i32, i32), sense: i32, mark: Mark) -> usize {
    if mark.is_empty() {
        return 0;
    }
    // Off-board cells read as Empty, which ends the run
    (1..)
        .map(|step| board.get(pos.offset(dir, sense * step)))
        .take_while(|&m| m == mark)
        .count()
}
