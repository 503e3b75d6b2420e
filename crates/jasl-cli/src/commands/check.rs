use colored::Colorize;

use jasl_mechanics::check::EFFECTS_HEADING;
use jasl_mechanics::{Action, Check, CheckSettings, DiceRoll, Phase};

pub fn run(
    phase: Phase,
    action: Action,
    count: u32,
    seed: Option<u64>,
    dice: Option<&[u32]>,
    json: bool,
) -> Result<(), String> {
    let settings = CheckSettings {
        phase,
        action,
        seed,
    };

    let checks: Vec<Check> = match dice {
        Some(values) => vec![settings.check(fixed_roll(values)?)],
        None => super::dice(seed)
            .take(count as usize)
            .map(|roll| settings.check(roll))
            .collect(),
    };

    if json {
        return super::print_json(&checks);
    }

    for (i, check) in checks.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_check(check);
    }
    Ok(())
}

fn fixed_roll(values: &[u32]) -> Result<DiceRoll, String> {
    match values {
        [white, colored, subsequent] => {
            DiceRoll::from_values(*white, *colored, *subsequent).map_err(|e| e.to_string())
        }
        _ => Err(format!(
            "expected three dice (white,colored,subsequent), got {}",
            values.len()
        )),
    }
}

fn print_check(check: &Check) {
    for line in check.summary_lines() {
        println!("{line}");
    }
    if check.has_effects() {
        println!("{}", EFFECTS_HEADING.bold());
        for effect in check.effects() {
            println!("{}", effect.to_string().yellow());
        }
    }
}
