use mazecheck_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Number of cardinal steps between `a` and `b` on an open grid, which makes
/// it an admissible heuristic for 4-connected mazes with unit step cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
