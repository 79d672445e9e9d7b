//! Square board geometry with row/column coordinates

use std::fmt;

use serde::Serialize;

use crate::rules::{check_board_size, ConfigError, GameConfig};

/// Base of the two-digit move encoding (`row * 10 + col`)
pub const ENCODING_BASE: i32 = 10;

/// Largest board whose cells all fit the two-digit encoding
pub const MAX_ENCODABLE_SIZE: usize = ENCODING_BASE as usize;

/// Line directions as (d_row, d_col)
/// Index: 0=horizontal, 1=vertical, 2=descending diagonal, 3=ascending diagonal
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Left to right
    (1, 0),  // Top to bottom
    (1, 1),  // Top-left to bottom-right
    (1, -1), // Top-right to bottom-left
];

// ============================================================================
// MARK
// ============================================================================

/// Contents of a cell. `X` always moves first within a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// The other player mark (`Empty` maps to itself)
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Mark::Empty => " ",
            Mark::X => "X",
            Mark::O => "O",
        };
        f.write_str(symbol)
    }
}

// ============================================================================
// POSITION
// ============================================================================

/// Board coordinates. Signed so that scans may step off the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along a direction vector
    pub fn offset(self, (d_row, d_col): (i32, i32), steps: i32) -> Self {
        Self::new(self.row + d_row * steps, self.col + d_col * steps)
    }

    /// Encode as `row * 10 + col`
    pub fn encode(self) -> i32 {
        self.row * ENCODING_BASE + self.col
    }

    /// Decode `row * 10 + col`; the tens digit is the row, the units digit the column
    pub fn decode(code: i32) -> Self {
        Self::new(code / ENCODING_BASE, code % ENCODING_BASE)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Square grid of marks.
///
/// Cells only ever go from `Empty` to a player mark, and [`Board::put`] is the
/// single way to change one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        check_board_size(size)?;
        Ok(Self::empty(size))
    }

    /// Create the empty board for a validated configuration
    pub fn for_config(config: &GameConfig) -> Self {
        Self::empty(config.board_size())
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if this position is on the board
    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Mark at `pos`; `Empty` for anything off the board
    pub fn get(&self, pos: Pos) -> Mark {
        self.index(pos).map_or(Mark::Empty, |i| self.cells[i])
    }

    /// Place `mark` at `pos`.
    ///
    /// Returns `false` and leaves the board untouched if `pos` is off the
    /// board, the cell is already taken, or `mark` is `Empty`.
    pub fn put(&mut self, mark: Mark, pos: Pos) -> bool {
        if mark.is_empty() {
            return false;
        }
        match self.index(pos) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i] = mark;
                true
            }
            _ => false,
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let n = self.size as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Pos::new(row, col)))
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&pos| self.get(pos).is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let n = self.size as i32;
        if pos.row < 0 || pos.row >= n || pos.col < 0 || pos.col >= n {
            return None;
        }
        Some(pos.row as usize * self.size + pos.col as usize)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as i32;
        for row in 0..n {
            if row > 0 {
                let separator = vec!["---"; self.size].join("+");
                writeln!(f, "{}", separator)?;
            }
            let cells: Vec<String> = (0..n)
                .map(|col| format!(" {} ", self.get(Pos::new(row, col))))
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
