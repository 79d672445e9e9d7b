//! Tournament execution - alternating first mark, sequential or parallel
//!
//! Level 1 - Orchestration and Level 2 - Phases

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use streak_core::{GameError, Player, Renderer};
use tracing::info;

use crate::config::TournamentConfig;
use crate::round::{play_round, RoundRecord};
use crate::tally::{Seat, Tally};

/// A round failed because a player broke the move contract
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("round {round} failed: {source}")]
    Round {
        round: usize,
        #[source]
        source: GameError,
    },
}

/// A named participant
pub struct Entrant {
    pub name: String,
    pub player: Box<dyn Player>,
}

impl Entrant {
    pub fn new(name: impl Into<String>, player: Box<dyn Player>) -> Self {
        Self {
            name: name.into(),
            player,
        }
    }
}

/// Result of a tournament
#[derive(Clone, Debug, Serialize)]
pub struct TournamentResult {
    /// Entrant names, indexed by seat
    pub names: [String; 2],
    /// Final counters
    pub tally: Tally,
    /// Base seed the rounds were derived from
    pub seed: u64,
    /// Every round in order
    pub rounds: Vec<RoundRecord>,
}

impl TournamentResult {
    pub fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }

    /// Average number of half-turns per round
    pub fn avg_half_turns(&self) -> f32 {
        if self.rounds.is_empty() {
            0.0
        } else {
            let total: usize = self.rounds.iter().map(|r| r.outcome.half_turns()).sum();
            total as f32 / self.rounds.len() as f32
        }
    }
}

impl fmt::Display for TournamentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "######### Results #########")?;
        writeln!(
            f,
            "Player 1, {} won: {} rounds",
            self.name(Seat::Player1),
            self.tally.player1_wins
        )?;
        writeln!(
            f,
            "Player 2, {} won: {} rounds",
            self.name(Seat::Player2),
            self.tally.player2_wins
        )?;
        write!(f, "Ties: {}", self.tally.ties)
    }
}

/// Two entrants playing a fixed number of rounds
pub struct Tournament {
    config: TournamentConfig,
    entrants: [Entrant; 2],
    renderer: Box<dyn Renderer>,
}

impl Tournament {
    pub fn new(
        config: TournamentConfig,
        player1: Entrant,
        player2: Entrant,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        Self {
            config,
            entrants: [player1, player2],
            renderer,
        }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    // ========================================================================
    // Level 1 - Orchestration
    // ========================================================================

    /// Run every round and tally the results
    pub fn run(&self) -> Result<TournamentResult, TournamentError> {
        self.run_with_callback(|_| {})
    }

    /// Run every round, calling `on_round` once per finished round in round order
    pub fn run_with_callback<F>(&self, mut on_round: F) -> Result<TournamentResult, TournamentError>
    where
        F: FnMut(&RoundRecord),
    {
        let seed = self.config.seed.unwrap_or_else(rand::random);

        info!(
            "Starting tournament: {} vs {} ({} rounds, size={}, streak={}, seed={})",
            self.entrants[0].name,
            self.entrants[1].name,
            self.config.rounds,
            self.config.game.board_size(),
            self.config.game.win_streak(),
            seed
        );

        let rounds = if self.config.parallel {
            self.execute_rounds_parallel(seed, &mut on_round)?
        } else {
            self.execute_rounds(seed, &mut on_round)?
        };
        let tally = aggregate_results(&rounds);

        info!(
            "Tournament finished: {} {} - {} {} ({} ties)",
            self.entrants[0].name,
            tally.player1_wins,
            tally.player2_wins,
            self.entrants[1].name,
            tally.ties
        );

        Ok(TournamentResult {
            names: [self.entrants[0].name.clone(), self.entrants[1].name.clone()],
            tally,
            seed,
            rounds,
        })
    }

    // ========================================================================
    // Level 2 - Phases
    // ========================================================================

    /// Play rounds one after another
    fn execute_rounds<F>(&self, seed: u64, on_round: &mut F) -> Result<Vec<RoundRecord>, TournamentError>
    where
        F: FnMut(&RoundRecord),
    {
        let mut records = Vec::with_capacity(self.config.rounds);
        for round in 0..self.config.rounds {
            let record = self.play_one(round, seed)?;
            self.log_round(&record);
            on_round(&record);
            records.push(record);
        }
        Ok(records)
    }

    /// Play rounds in parallel using rayon. Each round owns its board and RNG;
    /// results are collected in round order before anything is counted.
    fn execute_rounds_parallel<F>(
        &self,
        seed: u64,
        on_round: &mut F,
    ) -> Result<Vec<RoundRecord>, TournamentError>
    where
        F: FnMut(&RoundRecord),
    {
        let records = (0..self.config.rounds)
            .into_par_iter()
            .map(|round| self.play_one(round, seed))
            .collect::<Result<Vec<_>, _>>()?;

        for record in &records {
            self.log_round(record);
            on_round(record);
        }
        Ok(records)
    }

    // ========================================================================
    // Level 3 - Steps
    // ========================================================================

    fn play_one(&self, round: usize, seed: u64) -> Result<RoundRecord, TournamentError> {
        let players = [&*self.entrants[0].player, &*self.entrants[1].player];
        play_round(round, players, &*self.renderer, self.config.game, seed)
            .map_err(|source| TournamentError::Round { round, source })
    }

    fn log_round(&self, record: &RoundRecord) {
        let winner = match record.winner() {
            Some(seat) => self.entrants[seat.index()].name.as_str(),
            None => "tie",
        };
        info!(
            "Round {}: {} played first, result {} ({} half-turns)",
            record.round + 1,
            self.entrants[record.first_seat.index()].name,
            winner,
            record.outcome.half_turns()
        );
    }
}

/// Count each round for the seat that won it
fn aggregate_results(rounds: &[RoundRecord]) -> Tally {
    let mut tally = Tally::default();
    for record in rounds {
        tally.record(record.winner());
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use streak_core::{Board, GameConfig, Mark, Pos, RandomPlayer, VoidRenderer};

    /// Wins whenever it plays first on a board where its opponent does the same
    struct FirstCellPlayer;

    impl Player for FirstCellPlayer {
        fn select_move(&self, board: &Board, _mark: Mark, _rng: &mut dyn rand::RngCore) -> Option<Pos> {
            board.empty_cells().next()
        }
    }

    /// Claims a cell that is never free
    struct CheatingPlayer;

    impl Player for CheatingPlayer {
        fn select_move(&self, _board: &Board, _mark: Mark, _rng: &mut dyn rand::RngCore) -> Option<Pos> {
            Some(Pos::new(-1, -1))
        }
    }

    fn tournament(rounds: usize, game: GameConfig, p1: Box<dyn Player>, p2: Box<dyn Player>) -> Tournament {
        Tournament::new(
            TournamentConfig::new(rounds, game).with_seed(42),
            Entrant::new("first", p1),
            Entrant::new("second", p2),
            Box::new(VoidRenderer),
        )
    }

    #[test]
    fn test_alternating_first_mark_tally() {
        let t = tournament(
            4,
            GameConfig::new(3, 3).unwrap(),
            Box::new(FirstCellPlayer),
            Box::new(FirstCellPlayer),
        );
        let result = t.run().unwrap();

        assert_eq!(result.tally.player1_wins, 2);
        assert_eq!(result.tally.player2_wins, 2);
        assert_eq!(result.tally.ties, 0);
        assert_eq!(result.rounds[0].winner(), Some(Seat::Player1));
        assert_eq!(result.rounds[1].winner(), Some(Seat::Player2));
        assert_eq!(result.rounds[2].winner(), Some(Seat::Player1));
        assert_eq!(result.rounds[3].winner(), Some(Seat::Player2));
    }

    #[test]
    fn test_zero_rounds() {
        let t = tournament(0, GameConfig::default(), Box::new(RandomPlayer), Box::new(RandomPlayer));
        let result = t.run().unwrap();
        assert_eq!(result.tally, Tally::default());
        assert!(result.rounds.is_empty());
        assert_eq!(result.avg_half_turns(), 0.0);
    }

    #[test]
    fn test_callback_sees_rounds_in_order() {
        let t = tournament(5, GameConfig::default(), Box::new(RandomPlayer), Box::new(RandomPlayer));
        let mut seen = Vec::new();
        let result = t.run_with_callback(|r| seen.push(r.round)).unwrap();

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.tally.total(), 5);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let game = GameConfig::new(5, 3).unwrap();
        let sequential = tournament(12, game, Box::new(RandomPlayer), Box::new(streak_core::CleverPlayer));
        let parallel = Tournament::new(
            sequential.config().with_parallel(true),
            Entrant::new("first", Box::new(RandomPlayer)),
            Entrant::new("second", Box::new(streak_core::CleverPlayer)),
            Box::new(VoidRenderer),
        );

        let mut order = Vec::new();
        let a = sequential.run().unwrap();
        let b = parallel.run_with_callback(|r| order.push(r.round)).unwrap();

        assert_eq!(a.tally, b.tally);
        assert_eq!(order, (0..12).collect::<Vec<_>>());
        for (x, y) in a.rounds.iter().zip(&b.rounds) {
            assert_eq!(x.outcome.moves, y.outcome.moves);
        }
    }

    #[test]
    fn test_broken_player_aborts() {
        let t = tournament(3, GameConfig::default(), Box::new(RandomPlayer), Box::new(CheatingPlayer));
        let err = t.run().unwrap_err();
        // Player 2 moves second in round 0
        let TournamentError::Round { round, source } = err;
        assert_eq!(round, 0);
        assert!(matches!(source, GameError::IllegalMove { mark: Mark::O, .. }));
    }

    #[test]
    fn test_summary_format() {
        let result = TournamentResult {
            names: ["clever".to_string(), "whatever".to_string()],
            tally: Tally {
                player1_wins: 7,
                player2_wins: 2,
                ties: 1,
            },
            seed: 0,
            rounds: vec![],
        };
        assert_eq!(
            result.to_string(),
            "######### Results #########\n\
             Player 1, clever won: 7 rounds\n\
             Player 2, whatever won: 2 rounds\n\
             Ties: 1"
        );
    }
}
