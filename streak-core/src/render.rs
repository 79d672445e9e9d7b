//! Board rendering sink

use crate::board::Board;

/// Observes the board after every change. Must not mutate it.
pub trait Renderer: Send + Sync {
    fn render(&self, board: &Board);
}

/// Discards every board
#[derive(Clone, Copy, Debug, Default)]
pub struct VoidRenderer;

impl Renderer for VoidRenderer {
    fn render(&self, _board: &Board) {}
}
