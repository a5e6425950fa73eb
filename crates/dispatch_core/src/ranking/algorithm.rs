use crate::agents::Driver;
use crate::grid::{Bounds, Point};

/// Trait for ranking strategies that order candidate drivers by proximity
/// to a pickup location.
///
/// Ranking strategies determine which drivers are offered a pickup request.
/// Different strategies trade off exactness against the cost of examining
/// the whole fleet (e.g., sorted distance scans vs. early-terminating ring
/// expansion).
///
/// # Examples
///
/// ```rust
/// use dispatch_core::agents::Driver;
/// use dispatch_core::grid::{Bounds, Point};
/// use dispatch_core::ranking::{EuclideanRanker, Ranker};
///
/// let ranker = EuclideanRanker::default();
/// let fleet = vec![Driver::new(1, 3, 4), Driver::new(2, 1, 1)];
/// let ranked = ranker.rank(Point::new(0, 0), &fleet, Bounds::new(100, 100));
/// assert_eq!(ranked[0].id.0, 2);
/// ```
pub trait Ranker: Send + Sync {
    /// Rank the fleet by proximity to `origin` and return the closest few.
    ///
    /// # Arguments
    ///
    /// * `origin` - The pickup location distances are measured from
    /// * `drivers` - The candidate fleet, scanned in slice order
    /// * `bounds` - Grid extent; only the ring-expansion strategy uses it
    ///   (as the maximum search radius), the others accept it for interface
    ///   uniformity
    ///
    /// # Returns
    ///
    /// At most [`MAX_RESULTS`](super::MAX_RESULTS) drivers, copied out of the
    /// input slice in the strategy's chosen order. An empty fleet yields an
    /// empty vector, never an error.
    ///
    /// # Contract
    ///
    /// Implementations must be pure and deterministic: no internal state
    /// across calls, no mutation of caller data, no retained references, and
    /// identical inputs always produce identical output. Empty input, a fleet
    /// smaller than the cap, and a single candidate are all well-defined.
    fn rank(&self, origin: Point, drivers: &[Driver], bounds: Bounds) -> Vec<Driver>;
}
