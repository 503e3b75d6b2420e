//! The result of one roll of the dice.

use rand::Rng;
use serde::Serialize;

use super::{MAX_DIE, MIN_DIE};
use crate::error::{MechError, MechResult};

/// One roll of the white, colored and subsequent dice.
///
/// The combined result is the sum of the white and colored dice. A roll is
/// never changed after it is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiceRoll {
    white: u32,
    colored: u32,
    combined: u32,
    subsequent: u32,
}

impl DiceRoll {
    /// Roll all three dice using the given RNG.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let white = rng.random_range(MIN_DIE..=MAX_DIE);
        let colored = rng.random_range(MIN_DIE..=MAX_DIE);
        let subsequent = rng.random_range(MIN_DIE..=MAX_DIE);
        let roll = Self::new_unchecked(white, colored, subsequent);
        tracing::trace!(%roll, "rolled dice");
        roll
    }

    /// Build a roll from dice that were already thrown.
    pub fn from_values(white: u32, colored: u32, subsequent: u32) -> MechResult<Self> {
        check_face("white", white)?;
        check_face("colored", colored)?;
        check_face("subsequent", subsequent)?;
        Ok(Self::new_unchecked(white, colored, subsequent))
    }

    fn new_unchecked(white: u32, colored: u32, subsequent: u32) -> Self {
        Self {
            white,
            colored,
            combined: white + colored,
            subsequent,
        }
    }

    /// The white die.
    pub fn white(&self) -> u32 {
        self.white
    }

    /// The colored die.
    pub fn colored(&self) -> u32 {
        self.colored
    }

    /// Sum of the white and colored dice (2 to 12).
    pub fn combined(&self) -> u32 {
        self.combined
    }

    /// The subsequent die.
    pub fn subsequent(&self) -> u32 {
        self.subsequent
    }

    /// True when the white and colored dice match.
    pub fn is_doubles(&self) -> bool {
        self.white == self.colored
    }
}

fn check_face(die: &'static str, value: u32) -> MechResult<()> {
    if (MIN_DIE..=MAX_DIE).contains(&value) {
        Ok(())
    } else {
        Err(MechError::DieOutOfRange { die, value })
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "white: {}\tcolored: {}\tcombined: {}\tsubsequent: {}",
            self.white, self.colored, self.combined, self.subsequent
        )
    }
}
