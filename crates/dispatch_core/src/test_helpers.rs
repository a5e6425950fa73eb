//! Test helpers for common test setup and utilities.
//!
//! Seeded fleet generation shared by benchmarks and integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agents::Driver;
use crate::grid::{Bounds, Point};

/// Generate `count` drivers uniformly distributed over the grid.
///
/// Ids run `0..count`; the same seed always yields the same fleet.
pub fn random_fleet(count: usize, bounds: Bounds, seed: u64) -> Vec<Driver> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Driver::new(
                i as u32,
                rng.gen_range(0..bounds.width),
                rng.gen_range(0..bounds.height),
            )
        })
        .collect()
}

/// The grid center, where benchmark pickups are placed.
pub fn center(bounds: Bounds) -> Point {
    Point::new(bounds.width / 2, bounds.height / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_is_reproducible_for_a_seed() {
        let bounds = Bounds::new(100, 100);
        assert_eq!(random_fleet(50, bounds, 51), random_fleet(50, bounds, 51));
    }

    #[test]
    fn fleet_stays_within_bounds() {
        let bounds = Bounds::new(30, 60);
        for driver in random_fleet(200, bounds, 7) {
            assert!((0..bounds.width).contains(&driver.position.x));
            assert!((0..bounds.height).contains(&driver.position.y));
        }
    }

    #[test]
    fn fleet_ids_are_sequential() {
        let fleet = random_fleet(10, Bounds::new(100, 100), 1);
        for (i, driver) in fleet.iter().enumerate() {
            assert_eq!(driver.id.0, i as u32);
        }
    }
}
