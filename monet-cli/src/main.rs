use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use monet::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Uniform,
    Biased,
    Both,
}

impl ModeArg {
    fn modes(self) -> &'static [RollMode] {
        match self {
            ModeArg::Uniform => &[RollMode::Uniform],
            ModeArg::Biased => &[RollMode::Biased],
            ModeArg::Both => &[RollMode::Uniform, RollMode::Biased],
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to simulate per strategy
    #[arg(short, long, default_value_t = 1_000_000)]
    trials: usize,

    /// Which die model to roll with
    #[arg(short, long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,

    /// Random seed for reproducibility
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Spread the games over all cores
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Also write the results as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print a few single-die rolls before simulating
    #[arg(long, default_value_t = false)]
    demo_rolls: bool,
}

fn demo_rolls(roller: &mut Roller) -> anyhow::Result<()> {
    for sides in [6, 20, 100] {
        println!("Rolling a {sides}-sided die: {}", roll_uniform_once(sides));
    }

    for sides in [6, 100] {
        let mut die = Die::with_roller(sides, roller.fork())?;
        println!("\nRolling a {sides}-sided die 5 times:");
        for i in 1..=5 {
            println!(
                "Roll {i}: {} (biased: {})",
                die.roll_uniform(),
                die.roll_biased()
            );
        }
    }

    if let Err(err) = Die::new(-1) {
        println!("\nInvalid die: {err}");
    }
    println!("Rolling a 0-sided die returns: {}\n", roll_uniform_once(0));
    Ok(())
}

fn print_results(results: &SimulationResults) {
    println!("{}:", results.mode);
    for (name, summary) in &results.summaries {
        println!("{name}:");
        println!(
            "min: {}$, max: {}$, avg: {:.0}$",
            summary.min, summary.max, summary.avg
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    log::info!("Starting simulation with args: {:?}", args);

    let mut roller = match args.seed {
        Some(seed) => Roller::from_seed(seed),
        None => Roller::new(),
    };

    if args.demo_rolls {
        demo_rolls(&mut roller)?;
    }

    let mut all_results = Vec::new();
    for (i, &mode) in args.mode.modes().iter().enumerate() {
        let mut simulator = Simulator::new(args.trials, mode, roller.fork())?;
        log::info!(
            "Running {} {} games per strategy...",
            simulator.trials(),
            simulator.mode()
        );
        let results = if args.parallel {
            simulator.run_parallel()?
        } else {
            simulator.run()?
        };

        if i > 0 {
            println!();
        }
        print_results(&results);
        all_results.push(results);
    }

    if let Some(output) = &args.output {
        let file = std::fs::File::create(output)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &all_results)?;
        log::info!("Results written to {}", output.display());
    }

    Ok(())
}
