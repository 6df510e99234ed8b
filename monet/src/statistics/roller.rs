use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform randomness owned by a single die or simulation run.
/// Use [`Roller::fork`] for an independent child; a roller cannot be cloned.
///
/// ```compile_fail
/// # use monet::statistics::roller::Roller;
/// let roller = Roller::from_seed(1);
/// let _copy = roller.clone();
/// ```
#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    /// Seeds from the operating system, so two rollers created in the same
    /// instant are still independent.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let rng = StdRng::from_os_rng();
        Roller { rng }
    }

    /// Creates a new `Roller` instance with a different random seed.
    /// Useful for creating independent random number generators in multi-threaded contexts.
    pub fn fork(&mut self) -> Self {
        let mut seed = [0u8; 32];
        self.rng.fill(&mut seed);
        let rng = StdRng::from_seed(seed);
        Roller { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Roller { rng }
    }

    pub fn d(&mut self, die_size: u32) -> u32 {
        self.rng.random_range(1..=die_size)
    }

    /// Returns `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    /// One of -1, 0 or +1, uniformly.
    pub fn step(&mut self) -> i64 {
        self.rng.random_range(-1..=1)
    }

    #[cfg(test)]
    pub fn test_rng() -> Self {
        Self::from_seed(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Roller::from_seed(7);
        let mut b = Roller::from_seed(7);
        for _ in 0..100 {
            assert_eq!(a.d(100), b.d(100));
        }
    }

    #[test]
    fn test_fork_diverges_from_parent() {
        let mut parent = Roller::test_rng();
        let mut child = parent.fork();
        let parent_rolls: Vec<u32> = (0..32).map(|_| parent.d(1000)).collect();
        let child_rolls: Vec<u32> = (0..32).map(|_| child.d(1000)).collect();
        assert_ne!(parent_rolls, child_rolls);
    }

    #[test]
    fn test_step_range() {
        let mut rng = Roller::test_rng();
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let step = rng.step();
            assert!((-1..=1).contains(&step));
            seen[(step + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = Roller::test_rng();
        for _ in 0..1000 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }
}
