//! The energy game: bounded random redistribution of quanta.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::grid::{Grid, COLS, ROWS};
use super::tally::Tally;

/// Errors raised while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Start layout name is neither "uniform" nor "skewed".
    InvalidStart(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidStart(name) => {
                write!(f, "start must be \"uniform\" or \"skewed\", got \"{name}\"")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Initial layout of the quanta on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Start {
    /// One quantum on every site.
    Uniform,
    /// All quanta on site (0, 0).
    Skewed,
}

impl Start {
    fn grid(self) -> Grid {
        match self {
            Start::Uniform => Grid::uniform(),
            Start::Skewed => Grid::skewed(),
        }
    }
}

impl FromStr for Start {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Start::Uniform),
            "skewed" => Ok(Start::Skewed),
            other => Err(GameError::InvalidStart(other.to_string())),
        }
    }
}

impl fmt::Display for Start {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Start::Uniform => f.write_str("uniform"),
            Start::Skewed => f.write_str("skewed"),
        }
    }
}

/// One run of the energy game: `throws` successful transfers starting from
/// the `start` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyGame {
    pub throws: u64,
    pub start: Start,
}

impl EnergyGame {
    pub fn new(throws: u64, start: Start) -> Self {
        Self { throws, start }
    }

    /// Play the game and tally the final occupancies.
    ///
    /// Each attempt samples a site uniformly at random. An empty site does
    /// not count as a throw; the attempt is simply retried. A nonempty site
    /// loses one quantum, and a second independently sampled site (possibly
    /// the same one) gains it. The loop stops after `throws` successes.
    ///
    /// The conserved total is asserted after the run; a mismatch is a logic
    /// defect and aborts.
    pub fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> Tally {
        let mut grid = self.start.grid();
        let initial_total = grid.total();

        let mut successful = 0u64;
        let mut attempts = 0u64;
        while successful < self.throws {
            attempts += 1;
            let row = rng.random_range(0..ROWS);
            let col = rng.random_range(0..COLS);
            if grid.level(row, col) == 0 {
                // Unsuccessful throw: does not count, retry.
                continue;
            }
            successful += 1;
            grid.remove_quantum(row, col);
            let row2 = rng.random_range(0..ROWS);
            let col2 = rng.random_range(0..COLS);
            grid.add_quantum(row2, col2);
        }

        assert_eq!(
            grid.total(),
            initial_total,
            "energy not conserved after {successful} throws"
        );
        let tally = Tally::from_grid(&grid);
        assert_eq!(
            tally.weighted_total(),
            initial_total,
            "tally does not account for the conserved total"
        );

        debug!(
            throws = self.throws,
            attempts,
            start = %self.start,
            max_level = tally.levels.len() as u32 - 1,
            "game finished"
        );
        tally
    }

    /// Play with a seeded generator, for reproducible runs.
    pub fn play_seeded(&self, seed: u64) -> Tally {
        self.play(&mut StdRng::seed_from_u64(seed))
    }
}
