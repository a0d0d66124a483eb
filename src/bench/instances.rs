use rand::Rng;

use crate::types::{City, Item, Weight};

pub const MAX_WEIGHT: Weight = 50;
pub const MAX_VALUE: u32 = 100;
pub const MAX_NUMBER: i64 = 100;
pub const MAX_COORD: i32 = 1000;

/// Items named `A`..`Z` (repeating), weights in `1..=MAX_WEIGHT`, values in `1..=MAX_VALUE`.
pub fn generate_items<R: Rng>(rng: &mut R, n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            let name = char::from(b'A' + (i % 26) as u8).to_string();
            Item::new(name, rng.random_range(1..=MAX_WEIGHT), rng.random_range(1..=MAX_VALUE))
        })
        .collect()
}

/// Half of the total weight, at least 1.
pub fn choose_capacity(items: &[Item]) -> Weight {
    let total: u64 = items.iter().map(|item| item.weight as u64).sum();
    (total / 2).clamp(1, Weight::MAX as u64) as Weight
}

pub fn generate_numbers<R: Rng>(rng: &mut R, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(1..=MAX_NUMBER)).collect()
}

pub fn generate_target<R: Rng>(rng: &mut R) -> i64 {
    rng.random_range(1..=MAX_NUMBER)
}

/// Cities with integer coordinates in `0..=MAX_COORD`, ids starting at 1.
pub fn generate_cities<R: Rng>(rng: &mut R, n: usize) -> Vec<City> {
    (0..n)
        .map(|i| {
            City::new(
                i as i64 + 1,
                rng.random_range(0..=MAX_COORD) as f64,
                rng.random_range(0..=MAX_COORD) as f64,
            )
        })
        .collect()
}
