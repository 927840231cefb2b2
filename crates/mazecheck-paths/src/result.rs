use std::cmp::Ordering;

use crate::cost::Cost;

/// Outcome of a search: the visited states from start to goal and the total
/// path cost.
///
/// [`SearchResult::NO_RESULT`] (empty path, infinite cost) is the outcome
/// for a maze whose goal cannot be reached. Equality is structural, and
/// results order by cost first, then by path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S, C> {
    path: Vec<S>,
    cost: C,
}

impl<S, C: Cost> SearchResult<S, C> {
    /// No path exists.
    pub const NO_RESULT: Self = Self {
        path: Vec::new(),
        cost: C::INFINITY,
    };

    pub fn new(path: Vec<S>, cost: C) -> Self {
        Self { path, cost }
    }

    pub fn path(&self) -> &[S] {
        &self.path
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of states on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether this is the definitive "no path" outcome.
    pub fn is_no_result(&self) -> bool {
        self.path.is_empty() && !self.cost.is_reachable()
    }

    pub fn into_parts(self) -> (Vec<S>, C) {
        (self.path, self.cost)
    }
}

impl<S: PartialOrd, C: PartialOrd> PartialOrd for SearchResult<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cost.partial_cmp(&other.cost)? {
            Ordering::Equal => self.path.partial_cmp(&other.path),
            ord => Some(ord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazecheck_core::Point;

    #[test]
    fn no_result_equals_itself() {
        let a: SearchResult<Point, f64> = SearchResult::NO_RESULT;
        let b = SearchResult::new(Vec::new(), f64::INFINITY);
        assert_eq!(a, b);
        assert!(a.is_no_result());
        assert!(a.is_empty());
    }

    #[test]
    fn integer_no_result_uses_max() {
        let r: SearchResult<Point, i32> = SearchResult::NO_RESULT;
        assert_eq!(r.cost(), i32::MAX);
        assert!(r.is_no_result());
    }

    #[test]
    fn equality_is_structural() {
        let p = vec![Point::new(0, 0), Point::new(1, 0)];
        let a = SearchResult::new(p.clone(), 1.0);
        assert_eq!(a, SearchResult::new(p.clone(), 1.0));
        assert_ne!(a, SearchResult::new(p, 2.0));
        assert_ne!(
            a,
            SearchResult::new(vec![Point::new(0, 0), Point::new(0, 1)], 1.0)
        );
        assert!(!a.is_no_result());
    }

    #[test]
    fn cheaper_results_order_first() {
        let a = SearchResult::new(vec![Point::new(9, 9)], 1.0);
        let b = SearchResult::new(vec![Point::new(0, 0)], 2.0);
        assert!(a < b);
        assert!(b < SearchResult::NO_RESULT);
        let c = SearchResult::new(vec![Point::new(0, 0)], 1.0);
        assert!(c < a);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use mazecheck_core::Point;

    #[test]
    fn result_round_trip() {
        let r = SearchResult::new(vec![Point::new(0, 0), Point::new(0, 1)], 1_i32);
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult<Point, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
