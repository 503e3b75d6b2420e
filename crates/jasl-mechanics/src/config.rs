//! Settings applied to successive dice roll checks.

use crate::action::Action;
use crate::check::Check;
use crate::dice::{Dice, DiceRoll};
use crate::phase::Phase;

/// The phase and action a player has selected, and how dice are seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    /// Phase applied to each check.
    pub phase: Phase,
    /// Action applied to each check.
    pub action: Action,
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            phase: Phase::Rally,
            action: Action::Rally,
            seed: None,
        }
    }
}

impl CheckSettings {
    /// Set the phase.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Set the action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A dice roller honoring the seed.
    pub fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::new(),
        }
    }

    /// Check `roll` against the selected phase and action.
    pub fn check(&self, roll: DiceRoll) -> Check {
        Check::new(roll, self.phase, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let cfg = CheckSettings::default();
        assert_eq!(cfg.phase, Phase::Rally);
        assert_eq!(cfg.action, Action::Rally);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = CheckSettings::default()
            .with_phase(Phase::CloseCombat)
            .with_action(Action::Cct)
            .with_seed(9);
        assert_eq!(cfg.phase, Phase::CloseCombat);
        assert_eq!(cfg.action, Action::Cct);
        assert_eq!(cfg.seed, Some(9));
    }

    #[test]
    fn seeded_dice_repeat() {
        let cfg = CheckSettings::default().with_seed(77);
        assert_eq!(cfg.dice().roll(), cfg.dice().roll());
    }

    #[test]
    fn check_uses_selection() {
        let cfg = CheckSettings::default()
            .with_phase(Phase::Movement)
            .with_action(Action::MoraleCheck);
        let check = cfg.check(DiceRoll::from_values(6, 6, 6).unwrap());
        assert_eq!(check.phase(), Phase::Movement);
        assert_eq!(check.effects().lines(), vec!["Multiple Casualties on MC (A10.31)"]);
    }
}
