//! Automated move strategies

use rand::{Rng, RngCore};

use crate::board::{Board, Mark, Pos};
use crate::win::line_length;

// ============================================================================
// PLAYER CAPABILITY
// ============================================================================

/// A move strategy.
///
/// Players keep no state between calls; any randomness comes from the `rng`
/// handed in by the caller. The returned cell must be empty on `board`, and
/// `None` is only allowed when the player has nothing left to play.
pub trait Player: Send + Sync {
    fn select_move(&self, board: &Board, mark: Mark, rng: &mut dyn RngCore) -> Option<Pos>;
}

// ============================================================================
// RANDOM PLAYER
// ============================================================================

/// Plays a uniformly random empty cell
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_move(&self, board: &Board, _mark: Mark, rng: &mut dyn RngCore) -> Option<Pos> {
        random_empty_cell(board, rng)
    }
}

/// Sample cells uniformly until an empty one turns up
pub fn random_empty_cell(board: &Board, rng: &mut dyn RngCore) -> Option<Pos> {
    if board.is_full() {
        return None;
    }

    let size = board.size() as i32;
    loop {
        let pos = Pos::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if board.get(pos).is_empty() {
            return Some(pos);
        }
    }
}

// ============================================================================
// CLEVER PLAYER
// ============================================================================

/// Flips a coin every turn: heads plays like [`RandomPlayer`], tails plays
/// the empty cell that forms the longest line for its mark
#[derive(Clone, Copy, Debug, Default)]
pub struct CleverPlayer;

impl CleverPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for CleverPlayer {
    fn select_move(&self, board: &Board, mark: Mark, rng: &mut dyn RngCore) -> Option<Pos> {
        if rng.gen::<bool>() {
            random_empty_cell(board, rng)
        } else {
            best_line_move(board, mark)
        }
    }
}

/// Empty cell with the greatest [`line_length`] for `mark`.
///
/// Ties go to the first such cell in row-major order.
pub fn best_line_move(board: &Board, mark: Mark) -> Option<Pos> {
    let mut best: Option<(usize, Pos)> = None;

    for pos in board.empty_cells() {
        let score = line_length(board, pos, mark);
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, pos));
        }
    }

    best.map(|(_, pos)| pos)
}
