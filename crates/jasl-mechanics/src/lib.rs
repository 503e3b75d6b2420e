//! Dice roll wizard mechanics for Advanced Squad Leader.
//!
//! Rolls the white, colored and subsequent dice, names the turn phase and
//! action a roll is made for, and reports which special rules may come
//! into play for that roll.

pub mod action;
pub mod check;
pub mod config;
pub mod dice;
pub mod error;
pub mod phase;
pub mod rules;

pub use action::Action;
pub use check::Check;
pub use config::CheckSettings;
pub use dice::{Dice, DiceRoll};
pub use error::{MechError, MechResult};
pub use phase::Phase;
pub use rules::{Effect, Evaluation, evaluate};
