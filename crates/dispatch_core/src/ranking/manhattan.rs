use crate::agents::Driver;
use crate::grid::{Bounds, Point};

use super::algorithm::Ranker;
use super::MAX_RESULTS;

/// Grid (axis-aligned) distance ranking: |Δx| + |Δy|.
///
/// Same shape as [`EuclideanRanker`](super::EuclideanRanker) — stable sort,
/// closest [`MAX_RESULTS`] kept — but models a city grid where movement is
/// restricted to the axes.
#[derive(Debug, Default)]
pub struct ManhattanRanker;

impl Ranker for ManhattanRanker {
    fn rank(&self, origin: Point, drivers: &[Driver], _bounds: Bounds) -> Vec<Driver> {
        let mut ranked = drivers.to_vec();
        ranked.sort_by_key(|driver| origin.manhattan(driver.position));
        ranked.truncate(MAX_RESULTS);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_manhattan_distance() {
        let fleet = vec![
            Driver::new(1, 3, 4), // distance 7
            Driver::new(2, 0, 6), // distance 6
        ];

        let ranked = ManhattanRanker.rank(Point::new(0, 0), &fleet, Bounds::new(100, 100));

        let ids: Vec<u32> = ranked.iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn orders_differently_from_euclidean() {
        // (3,4) is closer than (0,6) in L2 (5 < 6) but farther in L1 (7 > 6).
        use super::super::EuclideanRanker;

        let fleet = vec![Driver::new(1, 3, 4), Driver::new(2, 0, 6)];
        let origin = Point::new(0, 0);
        let bounds = Bounds::new(100, 100);

        assert_eq!(ManhattanRanker.rank(origin, &fleet, bounds)[0].id.0, 2);
        assert_eq!(EuclideanRanker.rank(origin, &fleet, bounds)[0].id.0, 1);
    }

    #[test]
    fn ties_keep_input_order() {
        let fleet = vec![
            Driver::new(7, 2, 3), // distance 5
            Driver::new(8, 5, 0), // distance 5
            Driver::new(9, 0, 5), // distance 5
        ];

        let ranked = ManhattanRanker.rank(Point::new(0, 0), &fleet, Bounds::new(100, 100));

        let ids: Vec<u32> = ranked.iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn output_is_monotone_in_distance() {
        let origin = Point::new(50, 50);
        let fleet = vec![
            Driver::new(0, 99, 99),
            Driver::new(1, 50, 51),
            Driver::new(2, 0, 0),
            Driver::new(3, 60, 40),
            Driver::new(4, 50, 50),
            Driver::new(5, 30, 80),
        ];

        let ranked = ManhattanRanker.rank(origin, &fleet, Bounds::new(100, 100));

        let distances: Vec<i64> = ranked
            .iter()
            .map(|d| origin.manhattan(d.position))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }
}
