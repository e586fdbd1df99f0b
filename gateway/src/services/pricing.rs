//! Placeholder pricing strategies for imported items

use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::PricingStrategy;

/// Every import gets the same price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlaceholder(pub u64);

impl PricingStrategy for FixedPlaceholder {
    fn placeholder_price(&self) -> u64 {
        self.0
    }
}

/// Price drawn uniformly from an inclusive range
#[derive(Debug)]
pub struct RangeSampled {
    low: u64,
    high: u64,
    rng: Mutex<StdRng>,
}

impl RangeSampled {
    pub const DEFAULT_RANGE: RangeInclusive<u64> = 300..=800;

    /// Default range, seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(Self::DEFAULT_RANGE, StdRng::from_entropy())
    }

    /// Default range with a fixed seed, for reproducible prices
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Self::DEFAULT_RANGE, StdRng::seed_from_u64(seed))
    }

    /// Reversed bounds are swapped
    pub fn with_rng(range: RangeInclusive<u64>, rng: StdRng) -> Self {
        let (start, end) = range.into_inner();
        Self {
            low: start.min(end),
            high: start.max(end),
            rng: Mutex::new(rng),
        }
    }

    pub fn range(&self) -> RangeInclusive<u64> {
        self.low..=self.high
    }
}

impl Default for RangeSampled {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingStrategy for RangeSampled {
    fn placeholder_price(&self) -> u64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(self.low..=self.high)
    }
}
