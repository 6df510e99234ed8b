use std::num::NonZeroU32;

use serde::Serialize;

use crate::{
    rules::{
        dice::{Die, RollMode},
        strategy::{LAST_THROW, Strategy},
    },
    statistics::roller::Roller,
};

/// Faces on the die used for the stopping game.
pub const GAME_DIE_SIDES: NonZeroU32 = match NonZeroU32::new(100) {
    Some(sides) => sides,
    None => panic!("game die needs faces"),
};

/// Dollars paid out per pip of the accepted roll.
pub const PAYOUT_PER_PIP: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    /// Index of the throw that was kept, `0..=LAST_THROW`.
    pub throw: usize,
    pub roll: u32,
    pub payout: u32,
}

impl GameOutcome {
    fn accepted(throw: usize, roll: u32) -> Self {
        Self {
            throw,
            roll,
            payout: roll * PAYOUT_PER_PIP,
        }
    }
}

/// Plays one game with a fresh, OS-seeded die.
pub fn play_one_game(strategy: &Strategy, mode: RollMode) -> GameOutcome {
    play_one_game_with(strategy, mode, Roller::new())
}

/// Plays one game with a fresh die driven by `roller`.
///
/// The first throws are kept only if they reach the strategy's threshold; the
/// last throw is always kept.
pub fn play_one_game_with(strategy: &Strategy, mode: RollMode, roller: Roller) -> GameOutcome {
    let mut die = Die::from_sides(GAME_DIE_SIDES, roller);

    for throw in 0..LAST_THROW {
        let roll = die.roll(mode);
        if strategy.accepts(throw, roll) {
            return GameOutcome::accepted(throw, roll);
        }
    }

    let roll = die.roll(mode);
    GameOutcome::accepted(LAST_THROW, roll)
}
