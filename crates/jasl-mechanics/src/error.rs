//! Error types for the mechanics engine.

/// Errors that can occur when building rolls or parsing selections.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MechError {
    /// A die value was outside the faces of a six-sided die.
    #[error("{die} die value {value} is outside 1..=6")]
    DieOutOfRange {
        /// Which die carried the bad value (white, colored or subsequent).
        die: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// A phase name did not match any turn phase.
    #[error("unknown phase: {0}")]
    UnknownPhase(String),

    /// An action name did not match any action.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = MechError::DieOutOfRange {
            die: "white",
            value: 7,
        };
        assert_eq!(err.to_string(), "white die value 7 is outside 1..=6");
        assert_eq!(
            MechError::UnknownPhase("lunch".into()).to_string(),
            "unknown phase: lunch"
        );
    }
}
