//! Game state and the turn loop

use rand::RngCore;
use serde::Serialize;
use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::players::Player;
use crate::render::Renderer;
use crate::rules::GameConfig;
use crate::win::has_won;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Where a game stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Tied,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A player broke the move contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player {mark} returned no move with {empty} empty cells left")]
    NoMove { mark: Mark, empty: usize },

    #[error("player {mark} chose illegal cell ({}, {})", pos.row, pos.col)]
    IllegalMove { mark: Mark, pos: Pos },

    #[error("the game is already over")]
    Finished,
}

/// Outcome of a finished game
#[derive(Clone, Debug, Serialize)]
pub struct GameOutcome {
    /// Final status, never `InProgress`
    pub status: GameStatus,
    /// Marks placed, in order
    pub moves: Vec<Pos>,
}

impl GameOutcome {
    /// Winning mark, or `Empty` for a tie
    pub fn winner(&self) -> Mark {
        match self.status {
            GameStatus::Won(mark) => mark,
            GameStatus::InProgress | GameStatus::Tied => Mark::Empty,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.status == GameStatus::Tied
    }

    /// Number of half-turns played
    pub fn half_turns(&self) -> usize {
        self.moves.len()
    }
}

// ============================================================================
// GAME
// ============================================================================

/// A single game. `X` moves first, then marks strictly alternate.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    to_move: Mark,
    status: GameStatus,
    moves: Vec<Pos>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::for_config(&config),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            moves: Vec::with_capacity(config.cell_count()),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Mark that plays the next half-turn
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn half_turns(&self) -> usize {
        self.moves.len()
    }

    // ========================================================================
    // TURN LOOP
    // ========================================================================

    /// Play the game to the end. `first` plays `X`, `second` plays `O`.
    ///
    /// The renderer sees the empty board and then the board after every mark.
    pub fn play(
        mut self,
        first: &dyn Player,
        second: &dyn Player,
        renderer: &dyn Renderer,
        rng: &mut dyn RngCore,
    ) -> Result<GameOutcome, GameError> {
        renderer.render(&self.board);

        while !self.status.is_over() {
            let player = match self.to_move {
                Mark::O => second,
                _ => first,
            };
            self.play_turn(player, renderer, rng)?;
        }

        Ok(GameOutcome {
            status: self.status,
            moves: self.moves,
        })
    }

    /// Play one half-turn for the mark to move.
    ///
    /// Checks for a win first, then for a full board, and only then hands the
    /// turn over, so no player is ever asked to move on a full board.
    pub fn play_turn(
        &mut self,
        player: &dyn Player,
        renderer: &dyn Renderer,
        rng: &mut dyn RngCore,
    ) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::Finished);
        }

        let mark = self.to_move;
        let pos = player
            .select_move(&self.board, mark, rng)
            .ok_or_else(|| GameError::NoMove {
                mark,
                empty: self.board.count(Mark::Empty),
            })?;

        if !self.board.put(mark, pos) {
            return Err(GameError::IllegalMove { mark, pos });
        }
        self.moves.push(pos);
        debug!(%mark, row = pos.row, col = pos.col, turn = self.moves.len(), "placed mark");
        renderer.render(&self.board);

        self.status = if has_won(&self.board, mark, self.config.win_streak()) {
            GameStatus::Won(mark)
        } else if self.moves.len() == self.config.cell_count() {
            GameStatus::Tied
        } else {
            self.to_move = mark.opponent();
            GameStatus::InProgress
        };

        Ok(self.status)
    }
}

// ============================================================================
// TESTS
// ============================================================================
