use comfy_table::{ContentArrangement, Table};

use jasl_mechanics::rules::rule_groups;
use jasl_mechanics::{Action, Phase};

pub fn phases() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Phase", "Label"]);
    for phase in Phase::all() {
        table.add_row(vec![phase.name(), phase.label()]);
    }
    println!("{table}");
    Ok(())
}

pub fn actions() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Action", "Label"]);
    for action in Action::all() {
        table.add_row(vec![action.name(), action.label()]);
    }
    println!("{table}");
    Ok(())
}

pub fn rules() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Dice", "When", "Effect", "Rule"]);

    for group in rule_groups() {
        if group.rules().is_empty() {
            table.add_row(vec![group.name(), "-", "(none yet)", "-"]);
            continue;
        }
        for rule in group.rules() {
            for effect in rule.effects() {
                table.add_row(vec![
                    group.name(),
                    rule.condition(),
                    effect.description(),
                    effect.citation(),
                ]);
            }
        }
    }

    println!("{table}");
    Ok(())
}
