use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::rules::dice::Die;

/// Per-face counts of a sequence of rolls. Face `f` is stored at index `f - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceHistogram {
    counts: Vec<u64>,
}

/// Result of a two-sample chi-square homogeneity test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChiSquareTest {
    pub statistic: f64,
    pub degrees_of_freedom: u32,
    pub p_value: f64,
}

impl FaceHistogram {
    /// Largest face count a histogram keeps one counter per face for.
    pub const MAX_SIDES: u32 = 1 << 16;

    /// Returns `None` for a die with more than [`FaceHistogram::MAX_SIDES`]
    /// faces.
    pub fn new(sides: u32) -> Option<Self> {
        if sides > Self::MAX_SIDES {
            return None;
        }
        Some(Self {
            counts: vec![0; sides as usize],
        })
    }

    /// Rolls `die` `samples` times with `roll` and counts the faces. `None`
    /// if the die has too many faces to histogram.
    pub fn sample(
        die: &mut Die,
        samples: usize,
        mut roll: impl FnMut(&mut Die) -> u32,
    ) -> Option<Self> {
        let mut histogram = Self::new(die.sides())?;
        for _ in 0..samples {
            histogram.record(roll(die));
        }
        Some(histogram)
    }

    pub fn sides(&self) -> u32 {
        self.counts.len() as u32
    }

    /// Counts a roll. Values outside `1..=sides` are ignored.
    pub fn record(&mut self, face: u32) {
        if let Some(count) = (face as usize)
            .checked_sub(1)
            .and_then(|i| self.counts.get_mut(i))
        {
            *count += 1;
        }
    }

    pub fn count(&self, face: u32) -> u64 {
        (face as usize)
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of all rolls that landed on `face`.
    pub fn share(&self, face: u32) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(face) as f64 / total as f64
    }

    /// Largest per-face difference in share between the two histograms,
    /// relative to the share a fair die would give each face.
    pub fn max_relative_deviation(&self, other: &Self) -> Option<f64> {
        if self.sides() != other.sides() || self.total() == 0 || other.total() == 0 {
            return None;
        }
        let fair_share = 1.0 / self.sides() as f64;
        (1..=self.sides())
            .map(|face| (self.share(face) - other.share(face)).abs() / fair_share)
            .reduce(f64::max)
    }

    /// Tests whether both histograms could come from the same distribution.
    /// Faces that neither histogram saw are left out. Returns `None` when the
    /// histograms are not comparable or fewer than two faces were seen.
    pub fn chi_square_homogeneity(&self, other: &Self) -> Option<ChiSquareTest> {
        if self.sides() != other.sides() {
            return None;
        }
        let total_a = self.total() as f64;
        let total_b = other.total() as f64;
        if total_a == 0.0 || total_b == 0.0 {
            return None;
        }
        let grand_total = total_a + total_b;

        let mut statistic = 0.0;
        let mut seen_faces = 0u32;
        for (&a, &b) in self.counts.iter().zip(&other.counts) {
            let combined = (a + b) as f64;
            if combined == 0.0 {
                continue;
            }
            seen_faces += 1;
            let expected_a = total_a * combined / grand_total;
            let expected_b = total_b * combined / grand_total;
            statistic += (a as f64 - expected_a).powi(2) / expected_a;
            statistic += (b as f64 - expected_b).powi(2) / expected_b;
        }

        let degrees_of_freedom = seen_faces.checked_sub(1).filter(|&df| df > 0)?;
        let distribution = ChiSquared::new(f64::from(degrees_of_freedom)).ok()?;
        Some(ChiSquareTest {
            statistic,
            degrees_of_freedom,
            p_value: distribution.sf(statistic),
        })
    }
}
