//! Configuration types for tournament play
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};
use streak_core::GameConfig;

/// Tournament configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of rounds (games) to play
    pub rounds: usize,
    /// Board size and win streak for every round
    pub game: GameConfig,
    /// Base random seed; round `r` uses `seed + r` (None = from entropy)
    pub seed: Option<u64>,
    /// Whether to run rounds in parallel
    pub parallel: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            game: GameConfig::default(),
            seed: None,
            parallel: false,
        }
    }
}

impl TournamentConfig {
    /// Create config for `rounds` games of the given kind
    pub fn new(rounds: usize, game: GameConfig) -> Self {
        Self {
            rounds,
            game,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel rounds
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_config_defaults() {
        let config = TournamentConfig::default();
        assert_eq!(config.rounds, 10);
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
    }

    #[test]
    fn test_tournament_config_builders() {
        let game = GameConfig::new(5, 4).unwrap();
        let config = TournamentConfig::new(6, game).with_seed(9).with_parallel(true);
        assert_eq!(config.rounds, 6);
        assert_eq!(config.game.win_streak(), 4);
        assert_eq!(config.seed, Some(9));
        assert!(config.parallel);
    }
}
