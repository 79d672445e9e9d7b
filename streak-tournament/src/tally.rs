//! Seats and score keeping
//!
//! Level 4 - Utilities

use serde::Serialize;
use streak_core::Mark;

/// Which named entrant, independent of the mark it plays in a given round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Seat {
    Player1,
    Player2,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }

    /// Seat that plays `X` in `round`: player 1 on even rounds, player 2 on odd ones
    pub fn first_in_round(round: usize) -> Self {
        if round % 2 == 0 {
            Seat::Player1
        } else {
            Seat::Player2
        }
    }

    /// Seat that played `mark` in `round` (None for `Empty`)
    pub fn for_mark(round: usize, mark: Mark) -> Option<Self> {
        let first = Seat::first_in_round(round);
        match mark {
            Mark::X => Some(first),
            Mark::O => Some(first.other()),
            Mark::Empty => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::Player1 => 0,
            Seat::Player2 => 1,
        }
    }
}

/// Win and tie counters across a tournament
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub ties: usize,
}

impl Tally {
    /// Count one finished round; `None` is a tie
    pub fn record(&mut self, winner: Option<Seat>) {
        match winner {
            Some(Seat::Player1) => self.player1_wins += 1,
            Some(Seat::Player2) => self.player2_wins += 1,
            None => self.ties += 1,
        }
    }

    pub fn wins(&self, seat: Seat) -> usize {
        match seat {
            Seat::Player1 => self.player1_wins,
            Seat::Player2 => self.player2_wins,
        }
    }

    /// Rounds counted so far
    pub fn total(&self) -> usize {
        self.player1_wins + self.player2_wins + self.ties
    }

    pub fn win_rate(&self, seat: Seat) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.wins(seat) as f32 / self.total() as f32
        }
    }

    pub fn tie_rate(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.ties as f32 / self.total() as f32
        }
    }

    /// Combine two tallies
    pub fn combine(&self, other: &Tally) -> Tally {
        Tally {
            player1_wins: self.player1_wins + other.player1_wins,
            player2_wins: self.player2_wins + other.player2_wins,
            ties: self.ties + other.ties,
        }
    }
}
