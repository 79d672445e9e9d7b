//! Name-keyed construction of players and renderers

use streak_core::{CleverPlayer, Player, RandomPlayer, Renderer, VoidRenderer};

use crate::console::{ConsoleRenderer, HumanPlayer};

/// Player names accepted on the command line
pub const PLAYER_NAMES: [&str; 3] = ["human", "whatever", "clever"];

/// Renderer names accepted on the command line
pub const RENDERER_NAMES: [&str; 2] = ["console", "void"];

/// Build the player called `name` (None if unknown)
pub fn build_player(name: &str) -> Option<Box<dyn Player>> {
    match name {
        "human" => Some(Box::new(HumanPlayer::stdin())),
        "whatever" => Some(Box::new(RandomPlayer::new())),
        "clever" => Some(Box::new(CleverPlayer::new())),
        _ => None,
    }
}

/// Build the renderer called `name` (None if unknown)
pub fn build_renderer(name: &str) -> Option<Box<dyn Renderer>> {
    match name {
        "console" => Some(Box::new(ConsoleRenderer)),
        "void" => Some(Box::new(VoidRenderer)),
        _ => None,
    }
}

/// Whether the player reads from the keyboard
pub fn is_interactive(name: &str) -> bool {
    name == "human"
}
