/// Weighted choice and random orderings
pub mod sampling;

pub use sampling::{shuffled_corners, weighted_choice};
