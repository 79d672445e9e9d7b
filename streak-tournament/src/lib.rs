//! STREAK Tournament - repeated games between two entrants
//!
//! This crate provides tournament infrastructure:
//! - Round execution with per-round seeded randomness
//! - First-mark alternation between the two entrants
//! - Win/tie tallies and the fixed-format results summary
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: Tournament::run (orchestration)
//! - Level 2: sequential or parallel round execution (phases)
//! - Level 3: play_round (steps)
//! - Level 4: seats, tallies, configuration

mod config;
mod round;
mod tally;
mod tournament;

pub use config::TournamentConfig;
pub use round::{play_round, round_seed, RoundRecord};
pub use tally::{Seat, Tally};
pub use tournament::{Entrant, Tournament, TournamentError, TournamentResult};
