//! Game rules - board size and win streak

use serde::{Deserialize, Serialize};

/// Board size used when none is given
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Win streak used when none is given
pub const DEFAULT_WIN_STREAK: usize = 3;

/// Largest accepted board size. Keeps `size * size` and `i32` coordinates in range.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be at least 1, got {0}")]
    InvalidBoardSize(usize),

    #[error("board size must be at most {max}, got {size}")]
    BoardTooLarge { size: usize, max: usize },

    #[error("win streak must be between 1 and the board size ({board_size}), got {win_streak}")]
    InvalidWinStreak { board_size: usize, win_streak: usize },
}

/// Board size and win streak for a game.
///
/// Always satisfies `1 <= win_streak <= board_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    board_size: usize,
    win_streak: usize,
}

impl GameConfig {
    pub fn new(board_size: usize, win_streak: usize) -> Result<Self, ConfigError> {
        check_board_size(board_size)?;
        if win_streak == 0 || win_streak > board_size {
            return Err(ConfigError::InvalidWinStreak {
                board_size,
                win_streak,
            });
        }
        Ok(Self {
            board_size,
            win_streak,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn win_streak(&self) -> usize {
        self.win_streak
    }

    /// Number of half-turns before a game is forced to a tie
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_streak: DEFAULT_WIN_STREAK,
        }
    }
}

/// Reject sizes outside `1..=MAX_BOARD_SIZE`
pub(crate) fn check_board_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 {
        return Err(ConfigError::InvalidBoardSize(size));
    }
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::BoardTooLarge {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawGameConfig {
    board_size: usize,
    win_streak: usize,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.board_size, raw.win_streak)
    }
}
