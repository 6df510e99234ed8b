use serde::Serialize;

/// Number of throws a player gets in one game.
pub const THROWS_PER_GAME: usize = 10;
/// Index of the throw that is always accepted.
pub const LAST_THROW: usize = THROWS_PER_GAME - 1;

/// A stopping rule: on throw `i` the player keeps the roll when it is at
/// least `thresholds[i]`, otherwise throws again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Strategy {
    pub name: &'static str,
    thresholds: [u32; THROWS_PER_GAME],
}

impl Strategy {
    /// Panics (at compile time in a `const` context) unless the last
    /// threshold is 0, so every strategy accepts its final throw.
    pub const fn new(name: &'static str, thresholds: [u32; THROWS_PER_GAME]) -> Self {
        assert!(
            thresholds[LAST_THROW] == 0,
            "the last throw must always be accepted"
        );
        Self { name, thresholds }
    }

    pub fn thresholds(&self) -> &[u32; THROWS_PER_GAME] {
        &self.thresholds
    }

    /// Whether a roll on the given throw ends the game.
    pub fn accepts(&self, throw: usize, roll: u32) -> bool {
        throw >= LAST_THROW || roll >= self.thresholds[throw]
    }
}

pub const STRATEGY_1: Strategy = Strategy::new(
    "Strategy 1",
    [93, 90, 87, 84, 80, 76, 71, 66, 51, 0],
);

pub const STRATEGY_2: Strategy = Strategy::new(
    "Strategy 2",
    [100, 100, 100, 99, 98, 95, 88, 76, 51, 0],
);

pub const STRATEGY_3: Strategy = Strategy::new(
    "Strategy 3",
    [80, 70, 65, 60, 60, 60, 60, 55, 51, 0],
);

pub const STRATEGIES: [Strategy; 3] = [STRATEGY_1, STRATEGY_2, STRATEGY_3];
