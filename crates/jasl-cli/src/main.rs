//! Dice roll wizard for Advanced Squad Leader.

mod commands;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use jasl_mechanics::{Action, Phase};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jasl",
    about = "jASL dice roll wizard: roll the dice and list special rules that may apply",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the white, colored and subsequent dice
    Roll {
        /// Number of rolls
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Roll the dice and list special rules that may apply
    Check {
        /// Turn phase (e.g. rally, prep-fire, CLOSE_COMBAT)
        #[arg(short, long, default_value = "rally")]
        phase: Phase,

        /// Action the roll is for (cct, ift, morale-check, rally)
        #[arg(short, long, default_value = "rally")]
        action: Action,

        /// Number of rolls
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Use these dice instead of rolling: white,colored,subsequent
        #[arg(short, long, value_delimiter = ',', conflicts_with_all = ["count", "seed"])]
        dice: Option<Vec<u32>>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the turn phases
    Phases,

    /// List the actions
    Actions,

    /// List the special-rule table
    Rules,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll { count, seed, json } => commands::roll::run(count, seed, json),
        Commands::Check {
            phase,
            action,
            count,
            seed,
            dice,
            json,
        } => commands::check::run(phase, action, count, seed, dice.as_deref(), json),
        Commands::Phases => commands::list::phases(),
        Commands::Actions => commands::list::actions(),
        Commands::Rules => commands::list::rules(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
