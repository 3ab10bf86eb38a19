//! Random draws shared by the layout generators

use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::corners::Corner;

/// Weighted random selection of an index
///
/// Walks the cumulative distribution of `weights`; zero weights are never
/// drawn. Non-positive totals fall back to the first index.
pub fn weighted_choice<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }

    let mut rand_val = rng.random::<f64>() * total;
    let mut last_positive = 0;
    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        if rand_val < weight {
            return i;
        }
        rand_val -= weight;
        last_positive = i;
    }
    last_positive
}

/// All four corners in a uniformly random order
pub fn shuffled_corners<R: Rng + ?Sized>(rng: &mut R) -> [Corner; 4] {
    let mut corners = Corner::ALL;
    corners.shuffle(rng);
    corners
}
