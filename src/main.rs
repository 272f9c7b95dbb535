use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use roulette_strategies::config::{DEFAULT_ROUNDS, SimulationConfig};
use roulette_strategies::export::{self, DEFAULT_EXPORT_PATH};
use roulette_strategies::rules::{BASE_BET, InsolvencyPolicy, STARTING_BANKROLL};
use roulette_strategies::simulation::Simulation;
use roulette_strategies::types::Money;

/// Play four roulette betting strategies against a single-zero wheel and watch the house edge
/// grind their bankrolls down.
#[derive(Parser, Debug)]
#[command(name = "roulette_strategies")]
struct Args {
    /// Number of rounds to play
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    /// Base bet for every player
    #[arg(short, long, default_value_t = BASE_BET)]
    bet: Money,

    /// Starting bankroll for every player
    #[arg(long, default_value_t = STARTING_BANKROLL)]
    bankroll: Money,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// What a player does when it cannot cover its next bet
    #[arg(long, value_enum, default_value_t = InsolvencyPolicy::Stop)]
    insolvency: InsolvencyPolicy,

    /// Print the spin every N rounds, 0 to disable
    #[arg(short, long, default_value_t = 10)]
    print_every: u32,

    /// Where to write the bankroll history
    #[arg(short, long, default_value = DEFAULT_EXPORT_PATH)]
    output: PathBuf,

    /// Skip writing the bankroll history
    #[arg(long)]
    no_export: bool,

    /// Log every spin and wager
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            rounds: self.rounds,
            base_bet: self.bet,
            starting_bankroll: self.bankroll,
            seed: self.seed,
            insolvency: self.insolvency,
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut simulation = Simulation::new(args.config()).context("invalid simulation settings")?;

    println!("Starting simulation with {} rounds...", args.rounds);
    while let Some(record) = simulation.play_round() {
        if args.print_every > 0 && record.round % args.print_every == 0 {
            if let Some(detail) = simulation.details().last() {
                println!("Round {}: {}", record.round, detail.spin);
            }
        }
    }
    println!("\n✓ Simulation complete!\n");
    println!("{}", simulation.report());

    if !args.no_export {
        export::export_to_path(&args.output, simulation.records())
            .with_context(|| format!("failed to export to {}", args.output.display()))?;
        info!(path = %args.output.display(), rows = simulation.records().len(), "Exported bankroll history");
        println!("✓ Data exported to {}", args.output.display());
    }

    Ok(())
}
