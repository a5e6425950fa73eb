use crate::agents::Driver;
use crate::grid::{Bounds, Point};

use super::algorithm::Ranker;
use super::MAX_RESULTS;

/// Straight-line distance ranking.
///
/// Sorts the whole fleet ascending by squared Euclidean distance from the
/// pickup location and keeps the closest [`MAX_RESULTS`]. The sort is
/// stable, so drivers at equal distance keep their input order.
///
/// # Performance
///
/// Time complexity: O(n log n) over the fleet size. Examines every driver
/// regardless of how close the best candidates are; see
/// [`ExpandingRingRanker`](super::ExpandingRingRanker) for the
/// early-terminating alternative.
#[derive(Debug, Default)]
pub struct EuclideanRanker;

impl Ranker for EuclideanRanker {
    fn rank(&self, origin: Point, drivers: &[Driver], _bounds: Bounds) -> Vec<Driver> {
        let mut ranked = drivers.to_vec();
        ranked.sort_by_key(|driver| origin.euclidean_sq(driver.position));
        ranked.truncate(MAX_RESULTS);
        ranked
    }
}
