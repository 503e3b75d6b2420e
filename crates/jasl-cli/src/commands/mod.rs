pub mod check;
pub mod list;
pub mod roll;

use jasl_mechanics::{CheckSettings, Dice};

/// Build a dice roller, seeded when the user asked for one.
fn dice(seed: Option<u64>) -> Dice {
    let settings = CheckSettings {
        seed,
        ..CheckSettings::default()
    };
    tracing::debug!(?seed, "creating dice roller");
    settings.dice()
}

/// Print a value as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| format!("JSON error: {e}"))?;
    println!("{text}");
    Ok(())
}
