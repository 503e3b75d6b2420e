//! The special-rule table consulted after every dice roll.
//!
//! Groups run in declaration order and sub-rules in declaration order
//! within each group. New dice triggers are added here as a new
//! [`RuleGroup`]; [`evaluate`](super::evaluate) needs no change.

use super::{Effect, Rule, RuleGroup};
use crate::action::Action;
use crate::dice::DiceRoll;
use crate::phase::Phase;

// Combined 12

/// A 12 on the CCT lets the defender withdraw.
pub const CC_DEFENDER_MAY_WITHDRAW: Effect = Effect::new("CC Defender may withdraw", "A11.22");
/// A 12 on a morale check causes casualties.
pub const MULTIPLE_CASUALTIES_ON_MC: Effect =
    Effect::new("Multiple Casualties on MC", "A10.31");
/// A 12 on a rally attempt causes casualty reduction.
pub const RALLY_SUFFERS_CASUALTY_REDUCTION: Effect =
    Effect::new("Rally suffers Casualty Reduction", "A10.64");

// Combined 2

/// A 2 on the CCT lets the attacker withdraw.
pub const CC_ATTACKER_MAY_WITHDRAW: Effect = Effect::new("CC Attacker may withdraw", "A11.22");
/// A 2 on the CCT may create a leader.
pub const LEADER_CREATION_IN_CC: Effect =
    Effect::new("Possible Leader Creation in CC", "A18.12");
/// A 2 on a first self-rally may create a leader.
pub const LEADER_CREATION_IN_SELF_RALLY: Effect =
    Effect::new("Possible Leader Creation in first Self-Rally", "A18.11");
/// A 2 on a rally that is not a self-rally yields Heat of Battle.
pub const RALLY_YIELDS_HEAT_OF_BATTLE: Effect =
    Effect::new("Rally DR (not Self-Rally) yields Heat of Battle", "A15.1");
/// A 2 on a morale check yields Heat of Battle.
pub const MC_YIELDS_HEAT_OF_BATTLE: Effect =
    Effect::new("MC DR yields Heat of Battle", "A15.1");

// Doubles

/// Doubles on an IFT attack make the attacker cower.
pub const IFT_ATTACK_COWERS: Effect = Effect::new("IFT attack Cowers", "A7.9");

fn combined_twelve(roll: &DiceRoll) -> bool {
    roll.combined() == 12
}

fn combined_eleven(roll: &DiceRoll) -> bool {
    roll.combined() == 11
}

fn combined_two(roll: &DiceRoll) -> bool {
    roll.combined() == 2
}

fn doubles(roll: &DiceRoll) -> bool {
    roll.is_doubles()
}

fn close_combat_cct(phase: Phase, action: Action) -> bool {
    phase == Phase::CloseCombat && action == Action::Cct
}

fn rally_phase_rally(phase: Phase, action: Action) -> bool {
    phase == Phase::Rally && action == Action::Rally
}

fn morale_check(_phase: Phase, action: Action) -> bool {
    action == Action::MoraleCheck
}

fn ift(_phase: Phase, action: Action) -> bool {
    action == Action::Ift
}

const TWELVE: &[Rule] = &[
    Rule::new(
        "Close Combat phase, CCT",
        close_combat_cct,
        &[CC_DEFENDER_MAY_WITHDRAW],
    ),
    Rule::new(
        "any phase, Morale Check",
        morale_check,
        &[MULTIPLE_CASUALTIES_ON_MC],
    ),
    Rule::new(
        "Rally phase, Rally",
        rally_phase_rally,
        &[RALLY_SUFFERS_CASUALTY_REDUCTION],
    ),
];

// No effects are known for an 11 yet. The group stays so rules can be
// added without touching the evaluator.
const ELEVEN: &[Rule] = &[];

const TWO: &[Rule] = &[
    Rule::new(
        "Close Combat phase, CCT",
        close_combat_cct,
        &[CC_ATTACKER_MAY_WITHDRAW, LEADER_CREATION_IN_CC],
    ),
    Rule::new(
        "Rally phase, Rally",
        rally_phase_rally,
        &[LEADER_CREATION_IN_SELF_RALLY, RALLY_YIELDS_HEAT_OF_BATTLE],
    ),
    Rule::new(
        "any phase, Morale Check",
        morale_check,
        &[MC_YIELDS_HEAT_OF_BATTLE],
    ),
];

const DOUBLES: &[Rule] = &[Rule::new("any phase, IFT", ift, &[IFT_ATTACK_COWERS])];

static RULE_GROUPS: [RuleGroup; 4] = [
    RuleGroup::new("combined 12", combined_twelve, TWELVE),
    RuleGroup::new("combined 11", combined_eleven, ELEVEN),
    RuleGroup::new("combined 2", combined_two, TWO),
    RuleGroup::new("doubles", doubles, DOUBLES),
];

/// Every rule group, in evaluation order.
pub fn rule_groups() -> &'static [RuleGroup] {
    &RULE_GROUPS
}
