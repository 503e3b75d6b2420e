//! The phases of a player turn.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// A phase within each half of a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Rally Phase.
    Rally,
    /// Prep Fire Phase.
    PrepFire,
    /// Movement Phase.
    Movement,
    /// Defensive Fire Phase.
    DefensiveFire,
    /// Advancing Fire Phase.
    AdvancingFire,
    /// Rout Phase.
    Rout,
    /// Advance Phase.
    Advance,
    /// Close Combat Phase.
    CloseCombat,
}

impl Phase {
    /// All phases in turn order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Rally,
            Self::PrepFire,
            Self::Movement,
            Self::DefensiveFire,
            Self::AdvancingFire,
            Self::Rout,
            Self::Advance,
            Self::CloseCombat,
        ]
    }

    /// The display label, e.g. "Prep Fire".
    pub fn label(self) -> &'static str {
        match self {
            Self::Rally => "Rally",
            Self::PrepFire => "Prep Fire",
            Self::Movement => "Movement",
            Self::DefensiveFire => "Defensive Fire",
            Self::AdvancingFire => "Advancing Fire",
            Self::Rout => "Rout",
            Self::Advance => "Advance",
            Self::CloseCombat => "Close Combat",
        }
    }

    /// The identifier, e.g. "PREP_FIRE".
    pub fn name(self) -> &'static str {
        match self {
            Self::Rally => "RALLY",
            Self::PrepFire => "PREP_FIRE",
            Self::Movement => "MOVEMENT",
            Self::DefensiveFire => "DEFENSIVE_FIRE",
            Self::AdvancingFire => "ADVANCING_FIRE",
            Self::Rout => "ROUT",
            Self::Advance => "ADVANCE",
            Self::CloseCombat => "CLOSE_COMBAT",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = MechError;

    /// Accepts the identifier or the label in any case, with `_`, `-` or
    /// spaces between words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::all()
            .iter()
            .copied()
            .find(|p| normalize(p.label()) == wanted || normalize(p.name()) == wanted)
            .ok_or_else(|| MechError::UnknownPhase(s.to_string()))
    }
}

/// Lowercase with word separators collapsed to single spaces.
pub(crate) fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels() {
        assert_eq!(Phase::Rally.label(), "Rally");
        assert_eq!(Phase::PrepFire.label(), "Prep Fire");
        assert_eq!(Phase::DefensiveFire.label(), "Defensive Fire");
        assert_eq!(Phase::CloseCombat.to_string(), "Close Combat");
    }

    #[test]
    fn every_phase_has_distinct_label() {
        assert_eq!(Phase::all().len(), 8);
        let labels: HashSet<_> = Phase::all().iter().map(|p| p.label()).collect();
        let names: HashSet<_> = Phase::all().iter().map(|p| p.name()).collect();
        assert_eq!(labels.len(), 8);
        assert_eq!(names.len(), 8);
        assert!(labels.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn parse_accepts_names_and_labels() {
        assert_eq!("CLOSE_COMBAT".parse::<Phase>(), Ok(Phase::CloseCombat));
        assert_eq!("Close Combat".parse::<Phase>(), Ok(Phase::CloseCombat));
        assert_eq!("close-combat".parse::<Phase>(), Ok(Phase::CloseCombat));
        assert_eq!("  rout ".parse::<Phase>(), Ok(Phase::Rout));
        for phase in Phase::all() {
            assert_eq!(phase.name().parse::<Phase>(), Ok(*phase));
            assert_eq!(phase.label().parse::<Phase>(), Ok(*phase));
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "Lunch".parse::<Phase>(),
            Err(MechError::UnknownPhase("Lunch".to_string()))
        );
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&Phase::AdvancingFire).unwrap();
        assert_eq!(json, "\"ADVANCING_FIRE\"");
        let back: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phase::AdvancingFire);
    }
}
