use jasl_mechanics::DiceRoll;

pub fn run(count: u32, seed: Option<u64>, json: bool) -> Result<(), String> {
    let rolls: Vec<DiceRoll> = super::dice(seed).take(count as usize).collect();

    if json {
        return super::print_json(&rolls);
    }

    for roll in &rolls {
        println!("{roll}");
    }
    Ok(())
}
