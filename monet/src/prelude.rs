pub use crate::{
    error::SimulationError,
    rules::{
        dice::{Die, DieError, RollMode, roll_biased_once, roll_once, roll_uniform_once},
        strategy::{LAST_THROW, STRATEGIES, Strategy, THROWS_PER_GAME},
    },
    simulation::{
        game::{GameOutcome, play_one_game, play_one_game_with},
        integration::{SimulationResults, Simulator, run_simulation},
    },
    statistics::{
        distribution::{ChiSquareTest, FaceHistogram},
        roller::Roller,
        summary::{PayoutAccumulator, StatisticsSummary},
    },
};
