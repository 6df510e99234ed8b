use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    error::SimulationError,
    rules::{
        dice::RollMode,
        strategy::{STRATEGIES, Strategy},
    },
    simulation::game::play_one_game_with,
    statistics::{
        roller::Roller,
        summary::{PayoutAccumulator, StatisticsSummary},
    },
};

pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Games per work item in the parallel runner.
const CHUNK_SIZE: usize = 4096;

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResults {
    pub mode: RollMode,
    /// Games played per strategy.
    pub trials: usize,
    pub games_run: usize,
    #[serde(skip)]
    pub elapsed: chrono::Duration,
    pub summaries: BTreeMap<String, StatisticsSummary>,
}

impl SimulationResults {
    pub fn summary(&self, strategy: &Strategy) -> Option<&StatisticsSummary> {
        self.summaries.get(strategy.name)
    }

    pub fn games_per_second(&self) -> f64 {
        let elapsed = self.elapsed.num_milliseconds() as f64 / 1000.0;
        if elapsed > 0.0 {
            self.games_run as f64 / elapsed
        } else {
            0.0
        }
    }
}

/// Plays `trials` independent games for every predefined strategy and
/// aggregates the payouts. Every game gets a die whose roller is forked from
/// the simulator's root roller, so seeding the root makes a run reproducible.
#[derive(Debug)]
pub struct Simulator {
    trials: usize,
    mode: RollMode,
    roller: Roller,
    games_run: AtomicUsize,
    start_time: Timestamp,
}

impl Simulator {
    pub fn new(trials: usize, mode: RollMode, roller: Roller) -> Result<Self, SimulationError> {
        if trials == 0 {
            return Err(SimulationError::NoTrials);
        }
        Ok(Self {
            trials,
            mode,
            roller,
            games_run: AtomicUsize::new(0),
            start_time: chrono::Utc::now(),
        })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn mode(&self) -> RollMode {
        self.mode
    }

    /// Games played by this simulator across all runs so far.
    pub fn games_run(&self) -> usize {
        self.games_run.load(Ordering::Relaxed)
    }

    pub fn elapsed_time(&self) -> chrono::Duration {
        chrono::Utc::now() - self.start_time
    }

    pub fn run(&mut self) -> Result<SimulationResults, SimulationError> {
        self.start_time = chrono::Utc::now();
        log::debug!(
            "Running {} {} games per strategy sequentially",
            self.trials,
            self.mode
        );

        let mut summaries = BTreeMap::new();
        for strategy in &STRATEGIES {
            let mut acc = PayoutAccumulator::new();
            for _ in 0..self.trials {
                let outcome = play_one_game_with(strategy, self.mode, self.roller.fork());
                log::trace!(
                    "{}: kept {} on throw {}",
                    strategy.name,
                    outcome.roll,
                    outcome.throw
                );
                acc.record(outcome.payout);
                self.games_run.fetch_add(1, Ordering::Relaxed);
            }
            self.insert_summary(&mut summaries, strategy, acc)?;
        }

        Ok(self.finish(summaries))
    }

    /// Same as [`Simulator::run`], with the games of each strategy spread over
    /// the rayon thread pool. Chunk rollers are forked up front, so a seeded
    /// run gives the same results regardless of the number of threads.
    pub fn run_parallel(&mut self) -> Result<SimulationResults, SimulationError> {
        self.start_time = chrono::Utc::now();
        log::debug!(
            "Running {} {} games per strategy on {} threads",
            self.trials,
            self.mode,
            rayon::current_num_threads()
        );

        let mode = self.mode;
        let mut summaries = BTreeMap::new();
        for strategy in &STRATEGIES {
            let chunks: Vec<(usize, Roller)> = (0..self.trials)
                .step_by(CHUNK_SIZE)
                .map(|start| ((self.trials - start).min(CHUNK_SIZE), self.roller.fork()))
                .collect();

            let games_run = &self.games_run;
            let acc = chunks
                .into_par_iter()
                .map(|(games, mut roller)| {
                    let mut acc = PayoutAccumulator::new();
                    for _ in 0..games {
                        acc.record(play_one_game_with(strategy, mode, roller.fork()).payout);
                    }
                    games_run.fetch_add(games, Ordering::Relaxed);
                    acc
                })
                .reduce(PayoutAccumulator::new, PayoutAccumulator::merge);

            self.insert_summary(&mut summaries, strategy, acc)?;
        }

        Ok(self.finish(summaries))
    }

    fn insert_summary(
        &self,
        summaries: &mut BTreeMap<String, StatisticsSummary>,
        strategy: &Strategy,
        acc: PayoutAccumulator,
    ) -> Result<(), SimulationError> {
        let summary = acc.finalize()?;
        log::debug!(
            "{} ({}): min {} max {} avg {:.2}",
            strategy.name,
            self.mode,
            summary.min,
            summary.max,
            summary.avg
        );
        summaries.insert(strategy.name.to_string(), summary);
        Ok(())
    }

    fn finish(&self, summaries: BTreeMap<String, StatisticsSummary>) -> SimulationResults {
        let results = SimulationResults {
            mode: self.mode,
            trials: self.trials,
            games_run: self.trials * summaries.len(),
            elapsed: self.elapsed_time(),
            summaries,
        };
        log::info!(
            "Simulated {} {} games in {} ms ({:.0} games/sec)",
            results.games_run,
            results.mode,
            results.elapsed.num_milliseconds(),
            results.games_per_second()
        );
        results
    }
}

/// Runs `trials` games per predefined strategy with OS-seeded dice.
pub fn run_simulation(
    trials: usize,
    mode: RollMode,
) -> Result<SimulationResults, SimulationError> {
    Simulator::new(trials, mode, Roller::new())?.run()
}
