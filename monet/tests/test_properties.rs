//! Property-based tests for the die model and the stopping game.

use proptest::prelude::*;

use monet::prelude::*;
// the glob imports above both bring in a `Strategy`
use monet::rules::strategy::Strategy;

fn mode_strategy() -> impl proptest::strategy::Strategy<Value = RollMode> {
    prop_oneof![Just(RollMode::Uniform), Just(RollMode::Biased)]
}

proptest! {
    // 1. Every roll stays on the die
    #[test]
    fn rolls_in_range(sides in 1i64..=1000, seed in any::<u64>(), mode in mode_strategy()) {
        let mut die = Die::with_roller(sides, Roller::from_seed(seed)).unwrap();
        for _ in 0..200 {
            let roll = die.roll(mode);
            prop_assert!(roll >= 1 && i64::from(roll) <= sides, "roll={roll} sides={sides}");
        }
    }

    // 2. Construction succeeds exactly for positive face counts
    #[test]
    fn construction_validity(sides in -1000i64..=1000) {
        prop_assert_eq!(Die::new(sides).is_ok(), sides >= 1);
    }

    // 3. The convenience roll returns the sentinel only for invalid input
    #[test]
    fn roll_once_sentinel(sides in -100i64..=100, mode in mode_strategy()) {
        let roll = roll_once(sides, mode);
        if sides <= 0 {
            prop_assert_eq!(roll, 0);
        } else {
            prop_assert!(roll >= 1 && i64::from(roll) <= sides);
        }
    }

    // 4. A game ends within ten throws and pays the kept roll times 1000
    #[test]
    fn game_terminates(seed in any::<u64>(), index in 0usize..3, mode in mode_strategy()) {
        let outcome = play_one_game_with(&STRATEGIES[index], mode, Roller::from_seed(seed));
        prop_assert!(outcome.throw < THROWS_PER_GAME);
        prop_assert!((1..=100).contains(&outcome.roll));
        prop_assert_eq!(outcome.payout, outcome.roll * 1000);
    }

    // 5. Thresholds above the highest face push every game to the last throw
    #[test]
    fn unreachable_thresholds(seed in any::<u64>(), high in 101u32..1000, mode in mode_strategy()) {
        let mut thresholds = [high; THROWS_PER_GAME];
        thresholds[LAST_THROW] = 0;
        let strategy = Strategy::new("High", thresholds);
        let outcome = play_one_game_with(&strategy, mode, Roller::from_seed(seed));
        prop_assert_eq!(outcome.throw, LAST_THROW);
    }
}
