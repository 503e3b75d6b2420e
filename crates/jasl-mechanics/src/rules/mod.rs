//! Rules engine: which special rules a dice roll may bring into play.
//!
//! The rules live in a fixed table of [`RuleGroup`]s (see [`table`]). Each
//! group is keyed on the dice alone (a combined 12, doubles, ...) and holds
//! sub-rules keyed on the phase and action. [`evaluate`] walks every group
//! in order and collects the effects of each sub-rule that applies. Groups
//! never suppress one another, so one roll can pick up effects from several.

pub mod table;

pub use table::rule_groups;

use serde::Serialize;

use crate::action::Action;
use crate::dice::DiceRoll;
use crate::phase::Phase;

/// A notice that a special rule may apply, with its rules citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Effect {
    description: &'static str,
    citation: &'static str,
}

impl Effect {
    /// Create an effect from its description and citation.
    pub const fn new(description: &'static str, citation: &'static str) -> Self {
        Self {
            description,
            citation,
        }
    }

    /// What may happen, e.g. "IFT attack Cowers".
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The rules reference, e.g. "A7.9".
    pub fn citation(&self) -> &'static str {
        self.citation
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description, self.citation)
    }
}

/// A sub-rule: effects that apply for some phase and action combinations.
#[derive(Debug)]
pub struct Rule {
    condition: &'static str,
    applies: fn(Phase, Action) -> bool,
    effects: &'static [Effect],
}

impl Rule {
    /// Create a sub-rule. `condition` describes `applies` for display.
    pub const fn new(
        condition: &'static str,
        applies: fn(Phase, Action) -> bool,
        effects: &'static [Effect],
    ) -> Self {
        Self {
            condition,
            applies,
            effects,
        }
    }

    /// Human-readable phase/action condition.
    pub fn condition(&self) -> &'static str {
        self.condition
    }

    /// Whether this sub-rule applies to the phase and action.
    pub fn applies(&self, phase: Phase, action: Action) -> bool {
        (self.applies)(phase, action)
    }

    /// Effects emitted, in order, when the sub-rule applies.
    pub fn effects(&self) -> &'static [Effect] {
        self.effects
    }
}

/// A group of sub-rules that is considered when the dice match a trigger.
#[derive(Debug)]
pub struct RuleGroup {
    name: &'static str,
    trigger: fn(&DiceRoll) -> bool,
    rules: &'static [Rule],
}

impl RuleGroup {
    /// Create a group. An empty `rules` slice makes an inert group.
    pub const fn new(
        name: &'static str,
        trigger: fn(&DiceRoll) -> bool,
        rules: &'static [Rule],
    ) -> Self {
        Self {
            name,
            trigger,
            rules,
        }
    }

    /// Short name of the dice trigger, e.g. "combined 12".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the roll triggers this group.
    pub fn triggered_by(&self, roll: &DiceRoll) -> bool {
        (self.trigger)(roll)
    }

    /// Sub-rules in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    fn collect(&self, phase: Phase, action: Action, out: &mut Vec<Effect>) {
        for rule in self.rules.iter().filter(|r| r.applies(phase, action)) {
            out.extend_from_slice(rule.effects);
        }
    }
}

/// The effects found for one roll, in rule table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Evaluation {
    effects: Vec<Effect>,
}

impl Evaluation {
    /// The effects, in order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// True when no special rule applies.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Number of effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Iterate over the effects.
    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.effects.iter()
    }

    /// Whether the given effect was found.
    pub fn contains(&self, effect: &Effect) -> bool {
        self.effects.contains(effect)
    }

    /// Each effect rendered as "description (citation)".
    pub fn lines(&self) -> Vec<String> {
        self.effects.iter().map(Effect::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

/// Determine which special rules may apply to a roll made in `phase` for
/// `action`.
///
/// Every input is valid; a roll that triggers nothing gives an empty
/// [`Evaluation`]. The same inputs always give the same effects in the same
/// order.
pub fn evaluate(roll: DiceRoll, phase: Phase, action: Action) -> Evaluation {
    let mut effects = Vec::new();
    for group in rule_groups().iter().filter(|g| g.triggered_by(&roll)) {
        let before = effects.len();
        group.collect(phase, action, &mut effects);
        tracing::debug!(
            group = group.name(),
            %phase,
            %action,
            added = effects.len() - before,
            "rule group triggered"
        );
    }
    tracing::debug!(%roll, count = effects.len(), "evaluated roll");
    Evaluation { effects }
}
