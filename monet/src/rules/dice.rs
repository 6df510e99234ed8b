use std::num::NonZeroU32;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::statistics::roller::Roller;

/// Chance that the low-face heaviness is in play for a roll.
pub const BIAS_CHANCE: f64 = 0.30;
/// Chance that a low face in play flips to its opposite face.
pub const BIAS_FLIP_CHANCE: f64 = 0.15;
/// Chance that the previous roll pulls the result towards itself.
pub const MOMENTUM_CHANCE: f64 = 0.20;
/// Chance of an erratic +/-1 while the die is still new.
pub const BREAK_IN_CHANCE: f64 = 0.10;
/// Number of rolls after which a die counts as broken in.
pub const BREAK_IN_ROLLS: u32 = 10;

/// Bias only applies to dice with more faces than this.
const MIN_BIASED_SIDES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DieError {
    #[error("a die needs between 1 and {max} sides, got {0}", max = u32::MAX)]
    InvalidSideCount(i64),
}

#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollMode {
    #[default]
    #[display("uniform")]
    Uniform,
    #[display("biased")]
    Biased,
}

/// A die with a stylized physical model: low faces are slightly heavier, the
/// previous result drags on the next one and a new die is a little erratic.
///
/// Each die owns its roller, and dice cannot be copied:
///
/// ```compile_fail
/// # use monet::rules::dice::Die;
/// let die = Die::new(6).unwrap();
/// let _twin = die.clone();
/// ```
#[derive(Debug)]
pub struct Die {
    sides: NonZeroU32,
    last_roll: u32,
    roll_count: u32,
    roller: Roller,
}

impl Die {
    /// Creates a die with its own OS-seeded roller.
    pub fn new(sides: i64) -> Result<Self, DieError> {
        Self::with_roller(sides, Roller::new())
    }

    pub fn with_roller(sides: i64, roller: Roller) -> Result<Self, DieError> {
        let sides = u32::try_from(sides)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(DieError::InvalidSideCount(sides))?;
        Ok(Self::from_sides(sides, roller))
    }

    pub fn from_sides(sides: NonZeroU32, roller: Roller) -> Self {
        Self {
            sides,
            last_roll: 0,
            roll_count: 0,
            roller,
        }
    }

    pub fn sides(&self) -> u32 {
        self.sides.get()
    }

    /// The most recent result, or 0 before the first roll.
    pub fn last_roll(&self) -> u32 {
        self.last_roll
    }

    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    pub fn roll(&mut self, mode: RollMode) -> u32 {
        match mode {
            RollMode::Uniform => self.roll_uniform(),
            RollMode::Biased => self.roll_biased(),
        }
    }

    pub fn roll_uniform(&mut self) -> u32 {
        let result = self.roller.d(self.sides());
        self.record(result)
    }

    /// Rolls with the bias, momentum and break-in adjustments applied on top
    /// of a uniform base roll. Each adjustment draws its own randomness, and
    /// only once its precondition holds.
    pub fn roll_biased(&mut self) -> u32 {
        let sides = i64::from(self.sides());
        let base_roll = i64::from(self.roller.d(self.sides()));

        // opposite faces sum to sides + 1
        let mut bias_adjustment = 0;
        if self.sides() > MIN_BIASED_SIDES
            && self.roller.chance(BIAS_CHANCE)
            && base_roll <= sides / 2
            && self.roller.chance(BIAS_FLIP_CHANCE)
        {
            bias_adjustment = sides + 1 - 2 * base_roll;
        }

        let mut momentum_adjustment = 0;
        if self.last_roll > 0 && self.roller.chance(MOMENTUM_CHANCE) {
            let candidate = i64::from(self.last_roll) + self.roller.step();
            if (1..=sides).contains(&candidate) {
                momentum_adjustment = candidate - base_roll;
            }
        }

        let mut breaking_in_factor = 0;
        if self.roll_count < BREAK_IN_ROLLS && self.roller.chance(BREAK_IN_CHANCE) {
            breaking_in_factor = self.roller.step();
        }

        let total = base_roll + bias_adjustment + momentum_adjustment + breaking_in_factor;
        let result = u32::try_from(total.max(1)).map_or(self.sides(), |r| r.min(self.sides()));
        self.record(result)
    }

    fn record(&mut self, result: u32) -> u32 {
        self.last_roll = result;
        self.roll_count = self.roll_count.saturating_add(1);
        result
    }
}

/// Rolls a throwaway die once. Returns 0 instead of an error when `sides` is
/// not a valid face count; real rolls start at 1.
pub fn roll_once(sides: i64, mode: RollMode) -> u32 {
    match Die::new(sides) {
        Ok(mut die) => die.roll(mode),
        Err(err) => {
            log::debug!("roll_once: {err}, returning 0");
            0
        }
    }
}

pub fn roll_uniform_once(sides: i64) -> u32 {
    roll_once(sides, RollMode::Uniform)
}

pub fn roll_biased_once(sides: i64) -> u32 {
    roll_once(sides, RollMode::Biased)
}
