//! Distance estimates for informed search.

use warren_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// The default heuristic: admissible and consistent for 4-directional
/// movement with non-negative weights of at least 1 per step.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as f32
}

/// Euclidean (L2) distance between two coordinates.
///
/// An alternate for cost models that are not grid-aligned; not the
/// default.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f32 {
    let dr = a.row.abs_diff(b.row) as f32;
    let dc = a.col.abs_diff(b.col) as f32;
    (dr * dr + dc * dc).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axis_deltas() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(3, 4)), 7.0);
        assert_eq!(manhattan(Coord::new(3, 4), Coord::new(0, 0)), 7.0);
        assert_eq!(manhattan(Coord::new(2, 2), Coord::new(2, 2)), 0.0);
    }

    #[test]
    fn euclidean_is_the_straight_line() {
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(3, 4)), 5.0);
        let a = Coord::new(0, 0);
        let b = Coord::new(1, 1);
        assert!(euclidean(a, b) < manhattan(a, b));
    }
}
