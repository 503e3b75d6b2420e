//! Actions a dice roll can be made for.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;
use crate::phase::normalize;

/// An operation performed by or with a counter that calls for a dice roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Close Combat Table attack.
    Cct,
    /// Infantry Fire Table attack.
    Ift,
    /// Morale Check.
    MoraleCheck,
    /// Rally attempt.
    Rally,
}

impl Action {
    /// All actions.
    pub fn all() -> &'static [Self] {
        &[Self::Cct, Self::Ift, Self::MoraleCheck, Self::Rally]
    }

    /// The display label, e.g. "Morale Check".
    pub fn label(self) -> &'static str {
        match self {
            Self::Cct => "Close Combat Table",
            Self::Ift => "Infantry Fire Table",
            Self::MoraleCheck => "Morale Check",
            Self::Rally => "Rally",
        }
    }

    /// The identifier, e.g. "MORALE_CHECK".
    pub fn name(self) -> &'static str {
        match self {
            Self::Cct => "CCT",
            Self::Ift => "IFT",
            Self::MoraleCheck => "MORALE_CHECK",
            Self::Rally => "RALLY",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = MechError;

    /// Accepts the identifier, the label, or "mc" for a morale check.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted == "mc" {
            return Ok(Self::MoraleCheck);
        }
        Self::all()
            .iter()
            .copied()
            .find(|a| normalize(a.label()) == wanted || normalize(a.name()) == wanted)
            .ok_or_else(|| MechError::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels() {
        assert_eq!(Action::Cct.label(), "Close Combat Table");
        assert_eq!(Action::Ift.label(), "Infantry Fire Table");
        assert_eq!(Action::MoraleCheck.to_string(), "Morale Check");
        assert_eq!(Action::Rally.to_string(), "Rally");
    }

    #[test]
    fn every_action_has_distinct_label() {
        let labels: HashSet<_> = Action::all().iter().map(|a| a.label()).collect();
        let names: HashSet<_> = Action::all().iter().map(|a| a.name()).collect();
        assert_eq!(labels.len(), Action::all().len());
        assert_eq!(names.len(), Action::all().len());
    }

    #[test]
    fn parse() {
        assert_eq!("cct".parse::<Action>(), Ok(Action::Cct));
        assert_eq!("Infantry Fire Table".parse::<Action>(), Ok(Action::Ift));
        assert_eq!("morale_check".parse::<Action>(), Ok(Action::MoraleCheck));
        assert_eq!("MC".parse::<Action>(), Ok(Action::MoraleCheck));
        assert_eq!("RALLY".parse::<Action>(), Ok(Action::Rally));
        assert_eq!(
            "snipe".parse::<Action>(),
            Err(MechError::UnknownAction("snipe".to_string()))
        );
    }

    #[test]
    fn serializes_as_identifier() {
        assert_eq!(
            serde_json::to_string(&Action::MoraleCheck).unwrap(),
            "\"MORALE_CHECK\""
        );
        assert_eq!(serde_json::to_string(&Action::Cct).unwrap(), "\"CCT\"");
    }
}
