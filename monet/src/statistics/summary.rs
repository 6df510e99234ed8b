use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Payout statistics of one strategy over a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub min: u32,
    pub max: u32,
    pub avg: f64,
    pub games: u64,
}

/// Running min, max and sum of payouts. Partial accumulators from different
/// workers can be merged in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutAccumulator {
    min: u32,
    max: u32,
    sum: u64,
    count: u64,
}

impl Default for PayoutAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PayoutAccumulator {
    pub const fn new() -> Self {
        Self {
            min: u32::MAX,
            max: 0,
            sum: 0,
            count: 0,
        }
    }

    pub fn record(&mut self, payout: u32) {
        self.min = self.min.min(payout);
        self.max = self.max.max(payout);
        self.sum += u64::from(payout);
        self.count += 1;
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
        self
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn finalize(&self) -> Result<StatisticsSummary, SimulationError> {
        if self.count == 0 {
            return Err(SimulationError::EmptyAccumulator);
        }
        Ok(StatisticsSummary {
            min: self.min,
            max: self.max,
            avg: self.sum as f64 / self.count as f64,
            games: self.count,
        })
    }
}

impl Extend<u32> for PayoutAccumulator {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for payout in iter {
            self.record(payout);
        }
    }
}

impl FromIterator<u32> for PayoutAccumulator {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
