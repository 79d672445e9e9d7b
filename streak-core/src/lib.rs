//! STREAK Core - N-in-a-row game engine
//!
//! This crate provides the core game logic for STREAK:
//! - Square board of any size with a permissive, bounds-safe read
//! - Win detection for any streak length along rows, columns and diagonals
//! - Pluggable move strategies (random, line-building)
//! - The turn loop that drives a single game to a win or a tie

pub mod board;
pub mod rules;
pub mod win;
pub mod players;
pub mod render;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, Mark, Pos, DIRECTIONS, ENCODING_BASE, MAX_ENCODABLE_SIZE};
pub use rules::{ConfigError, GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_STREAK, MAX_BOARD_SIZE};
pub use win::{has_won, line_length};
pub use players::{best_line_move, random_empty_cell, CleverPlayer, Player, RandomPlayer};
pub use render::{Renderer, VoidRenderer};
pub use game::{Game, GameError, GameOutcome, GameStatus};
