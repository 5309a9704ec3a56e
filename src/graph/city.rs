//! City model: points in 3-space with symmetric and asymmetric distances.

use rand::Rng;

/// A city located in 3-space.
///
/// The `z` coordinate models altitude and only matters for the asymmetric
/// distance, which makes downhill travel cheaper than uphill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl City {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance, identical in both directions.
    pub fn distance_symmetric(from: &City, to: &City) -> f64 {
        ((from.x - to.x).powi(2) + (from.y - to.y).powi(2) + (from.z - to.z).powi(2)).sqrt()
    }

    /// Euclidean distance scaled by direction of altitude change:
    /// 0.9 downhill, 1.1 uphill, 1.0 on the level.
    pub fn distance_asymmetric(from: &City, to: &City) -> f64 {
        let multiplier = if from.z > to.z {
            0.9
        } else if from.z < to.z {
            1.1
        } else {
            1.0
        };
        Self::distance_symmetric(from, to) * multiplier
    }

    /// Generates `count` cities uniformly within the given coordinate ranges.
    pub fn generate<R: Rng>(
        count: usize,
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
        rng: &mut R,
    ) -> Vec<City> {
        (0..count)
            .map(|_| {
                City::new(
                    rng.random_range(x_range.0..x_range.1),
                    rng.random_range(y_range.0..y_range.1),
                    rng.random_range(z_range.0..z_range.1),
                )
            })
            .collect()
    }
}
