use std::collections::HashSet;

use crate::agents::{Driver, DriverId};
use crate::grid::{Bounds, Point};

use super::algorithm::Ranker;
use super::MAX_RESULTS;

/// Square-ring discovery by Chebyshev distance.
///
/// Scans concentric square "rings" of increasing radius around the pickup
/// location — ring `r` is the set of points at Chebyshev distance
/// max(|Δx|, |Δy|) = r — admitting drivers in input order as their ring is
/// reached, and returns as soon as [`MAX_RESULTS`] are admitted, even
/// mid-ring. If the cap is never reached the search stops once the radius
/// exceeds `max(width, height)` of the grid.
///
/// # Algorithm Behavior
///
/// 1. radius = 0; admitted drivers tracked in a set keyed by [`DriverId`]
/// 2. Per radius, scan all not-yet-admitted drivers in input order and admit
///    those whose Chebyshev distance equals the radius
/// 3. Return immediately at the cap, otherwise increment the radius and
///    repeat until it exceeds the grid extent
///
/// Within a ring, admitted drivers follow input order rather than true
/// distance. The ordering is coarser than the sorting strategies; the payoff
/// is early termination without examining distant drivers once enough nearby
/// ones are found.
///
/// The admission set makes re-admission impossible even if a driver were to
/// match more than one radius. No driver can under the Chebyshev metric, but
/// the guard keeps the no-duplicates guarantee independent of the metric.
#[derive(Debug, Default)]
pub struct ExpandingRingRanker;

impl Ranker for ExpandingRingRanker {
    fn rank(&self, origin: Point, drivers: &[Driver], bounds: Bounds) -> Vec<Driver> {
        let mut found: Vec<Driver> = Vec::new();
        let mut admitted: HashSet<DriverId> = HashSet::new();
        let max_radius = bounds.max_extent();
        let mut radius: i64 = 0;

        while found.len() < MAX_RESULTS && radius <= max_radius {
            for driver in drivers {
                if admitted.contains(&driver.id) {
                    continue;
                }
                if origin.chebyshev(driver.position) == radius {
                    admitted.insert(driver.id);
                    found.push(*driver);
                    if found.len() >= MAX_RESULTS {
                        return found;
                    }
                }
            }
            radius += 1;
        }
        found
    }
}
