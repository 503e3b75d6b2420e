//! Dice rolling.
//!
//! Every roll in ASL uses the same three six-sided dice: a white die and a
//! colored die that are read together, plus a subsequent die for follow-up
//! rolls. All three are drawn at once.

pub mod roll;

pub use roll::DiceRoll;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Lowest face of a die.
pub const MIN_DIE: u32 = 1;

/// Highest face of a die.
pub const MAX_DIE: u32 = 6;

/// Roll the dice once using the thread-local generator.
pub fn roll() -> DiceRoll {
    DiceRoll::roll(&mut rand::rng())
}

/// A dice roller that owns its random number generator.
///
/// Seeding makes a sequence of rolls reproducible.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    /// Create a roller seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll the white, colored and subsequent dice.
    pub fn roll(&mut self) -> DiceRoll {
        DiceRoll::roll(&mut self.rng)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Dice {
    type Item = DiceRoll;

    fn next(&mut self) -> Option<DiceRoll> {
        Some(self.roll())
    }
}
