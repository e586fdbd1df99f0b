//! Tests for placeholder pricing strategies

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::services::{FixedPlaceholder, RangeSampled};
use crate::traits::PricingStrategy;

#[test]
fn test_fixed_placeholder_is_constant() {
    let pricing = FixedPlaceholder(550);
    assert!((0..10).all(|_| pricing.placeholder_price() == 550));
}

#[test]
fn test_range_sampled_stays_in_default_range() {
    let pricing = RangeSampled::seeded(7);
    for _ in 0..500 {
        let price = pricing.placeholder_price();
        assert!(RangeSampled::DEFAULT_RANGE.contains(&price), "{price} out of range");
    }
}

#[test]
fn test_same_seed_same_prices() {
    let first = RangeSampled::seeded(42);
    let second = RangeSampled::seeded(42);

    let a: Vec<u64> = (0..20).map(|_| first.placeholder_price()).collect();
    let b: Vec<u64> = (0..20).map(|_| second.placeholder_price()).collect();
    assert_eq!(a, b);
}

#[test]
fn test_single_value_range() {
    let pricing = RangeSampled::with_rng(400..=400, StdRng::seed_from_u64(1));
    assert_eq!(pricing.placeholder_price(), 400);
}

#[test]
fn test_reversed_bounds_are_swapped() {
    let pricing = RangeSampled::with_rng(800..=300, StdRng::seed_from_u64(1));
    assert_eq!(pricing.range(), 300..=800);
    assert!(pricing.range().contains(&pricing.placeholder_price()));
}
