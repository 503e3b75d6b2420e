//! A dice roll checked against the special-rule table.

use serde::Serialize;

use crate::action::Action;
use crate::dice::DiceRoll;
use crate::phase::Phase;
use crate::rules::{self, Evaluation};

/// One roll, the phase and action it was made for, and the effects that
/// may apply.
///
/// The effects are evaluated once on construction and always belong to the
/// roll, phase and action held alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    roll: DiceRoll,
    phase: Phase,
    action: Action,
    effects: Evaluation,
}

/// Heading printed above the effects of a check.
pub const EFFECTS_HEADING: &str = "Effects -";

impl Check {
    /// Evaluate `roll` for the given phase and action.
    pub fn new(roll: DiceRoll, phase: Phase, action: Action) -> Self {
        Self {
            roll,
            phase,
            action,
            effects: rules::evaluate(roll, phase, action),
        }
    }

    /// The dice.
    pub fn roll(&self) -> DiceRoll {
        self.roll
    }

    /// Phase of the current turn.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// What the roll was made for.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Effects found by the rules engine.
    pub fn effects(&self) -> &Evaluation {
        &self.effects
    }

    /// The roll summary line, e.g. `Dice roll - \twhite: 3\t...`.
    pub fn dr_results(&self) -> String {
        format!("Dice roll - \t{}", self.roll)
    }

    /// Phase and action, tab separated.
    pub fn parameters(&self) -> String {
        format!("phase: {}\taction: {}", self.phase, self.action)
    }

    /// The two summary lines that open the full description: the dice roll
    /// and the parameters.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            self.dr_results(),
            format!("Parameters - \t{}", self.parameters()),
        ]
    }

    /// True when at least one special rule may apply.
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [roll, parameters] = self.summary_lines();
        write!(f, "{roll}\n{parameters}")?;
        if self.has_effects() {
            write!(f, "\n{EFFECTS_HEADING}")?;
            for effect in &self.effects {
                write!(f, "\n{effect}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters() {
        let check = Check::new(
            DiceRoll::from_values(2, 3, 4).unwrap(),
            Phase::DefensiveFire,
            Action::MoraleCheck,
        );
        assert_eq!(
            check.parameters(),
            "phase: Defensive Fire\taction: Morale Check"
        );
    }

    #[test]
    fn display_without_effects() {
        let check = Check::new(
            DiceRoll::from_values(2, 3, 4).unwrap(),
            Phase::PrepFire,
            Action::Ift,
        );
        assert!(!check.has_effects());
        assert_eq!(
            check.to_string(),
            "Dice roll - \twhite: 2\tcolored: 3\tcombined: 5\tsubsequent: 4\n\
             Parameters - \tphase: Prep Fire\taction: Infantry Fire Table"
        );
    }

    #[test]
    fn display_with_effects() {
        let check = Check::new(
            DiceRoll::from_values(1, 1, 5).unwrap(),
            Phase::CloseCombat,
            Action::Cct,
        );
        assert_eq!(
            check.to_string(),
            "Dice roll - \twhite: 1\tcolored: 1\tcombined: 2\tsubsequent: 5\n\
             Parameters - \tphase: Close Combat\taction: Close Combat Table\n\
             Effects -\n\
             CC Attacker may withdraw (A11.22)\n\
             Possible Leader Creation in CC (A18.12)"
        );
    }

    #[test]
    fn accessors_match_construction() {
        let roll = DiceRoll::from_values(6, 6, 3).unwrap();
        let check = Check::new(roll, Phase::Rally, Action::Rally);
        assert_eq!(check.roll(), roll);
        assert_eq!(check.phase(), Phase::Rally);
        assert_eq!(check.action(), Action::Rally);
        assert_eq!(
            check.effects(),
            &rules::evaluate(roll, Phase::Rally, Action::Rally)
        );
    }

    #[test]
    fn summary_lines_open_the_description() {
        let check = Check::new(
            DiceRoll::from_values(6, 6, 3).unwrap(),
            Phase::Rally,
            Action::Rally,
        );
        let [roll, parameters] = check.summary_lines();
        let text = check.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(roll.as_str()));
        assert_eq!(lines.next(), Some(parameters.as_str()));
        assert_eq!(lines.next(), Some(EFFECTS_HEADING));
        assert_eq!(
            lines.next(),
            Some("Rally suffers Casualty Reduction (A10.64)")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn serializes() {
        let check = Check::new(
            DiceRoll::from_values(3, 3, 2).unwrap(),
            Phase::AdvancingFire,
            Action::Ift,
        );
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["phase"], "ADVANCING_FIRE");
        assert_eq!(json["action"], "IFT");
        assert_eq!(json["roll"]["combined"], 6);
        assert_eq!(json["effects"][0]["citation"], "A7.9");
    }
}
