//! Round runner - executes single games
//!
//! Level 3 - Step-level implementation

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use streak_core::{Game, GameConfig, GameError, GameOutcome, Player, Renderer};

use crate::tally::Seat;

/// Outcome of one round with context about who played which mark
#[derive(Clone, Debug, Serialize)]
pub struct RoundRecord {
    /// Zero-based round index
    pub round: usize,
    /// Seat that played `X` this round
    pub first_seat: Seat,
    /// Finished game
    pub outcome: GameOutcome,
}

impl RoundRecord {
    /// Winning seat (None for a tie)
    pub fn winner(&self) -> Option<Seat> {
        Seat::for_mark(self.round, self.outcome.winner())
    }
}

/// Seed for a round: each round gets its own stream so that results do not
/// depend on the order rounds run in
pub fn round_seed(base_seed: u64, round: usize) -> u64 {
    base_seed.wrapping_add(round as u64)
}

/// Play round `round` between the two seated players.
///
/// `players` is indexed by seat; the seat returned by
/// [`Seat::first_in_round`] plays `X`.
pub fn play_round(
    round: usize,
    players: [&dyn Player; 2],
    renderer: &dyn Renderer,
    config: GameConfig,
    base_seed: u64,
) -> Result<RoundRecord, GameError> {
    let first_seat = Seat::first_in_round(round);
    let first = players[first_seat.index()];
    let second = players[first_seat.other().index()];

    let mut rng = ChaCha8Rng::seed_from_u64(round_seed(base_seed, round));
    let outcome = Game::new(config).play(first, second, renderer, &mut rng)?;

    Ok(RoundRecord {
        round,
        first_seat,
        outcome,
    })
}
