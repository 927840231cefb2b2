use std::fmt;

use mazecheck_core::{Maze, Point};

use crate::cost::Cost;
use crate::result::SearchResult;

/// Check that `result` is a valid solution of `maze` with uniform `step`
/// cost.
///
/// The path must run from the start to the goal through passable cells,
/// each state one cardinal step from the previous one, and the cost must be
/// the sum of the steps taken.
pub fn verify_path<C: Cost>(
    result: &SearchResult<Point, C>,
    maze: &Maze,
    step: C,
) -> Result<(), PathError<C>> {
    let path = result.path();
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Err(PathError::EmptyPath);
    };
    if first != maze.start() {
        return Err(PathError::WrongStart { found: first });
    }
    if last != maze.goal() {
        return Err(PathError::WrongEnd { found: last });
    }

    let mut expected = C::ZERO;
    for (index, &p) in path.iter().enumerate() {
        if !maze.is_passable(p) {
            return Err(PathError::Blocked { index, at: p });
        }
        if index == 0 {
            continue;
        }
        let from = path[index - 1];
        if !from.is_adjacent(p) {
            return Err(PathError::NotAdjacent { index, from, to: p });
        }
        expected = expected.add_saturating(step);
    }

    if result.cost() != expected {
        return Err(PathError::CostMismatch {
            expected,
            found: result.cost(),
        });
    }
    Ok(())
}

/// Why a search result is not a valid maze solution.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError<C> {
    EmptyPath,
    WrongStart { found: Point },
    WrongEnd { found: Point },
    /// The state at `index` is a blocked or out-of-bounds cell.
    Blocked { index: usize, at: Point },
    /// The state at `index` is not one step away from its predecessor.
    NotAdjacent { index: usize, from: Point, to: Point },
    CostMismatch { expected: C, found: C },
}

impl<C: fmt::Debug> fmt::Display for PathError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "path: empty"),
            Self::WrongStart { found } => write!(f, "path: starts at {found}, not at the start"),
            Self::WrongEnd { found } => write!(f, "path: ends at {found}, not at the goal"),
            Self::Blocked { index, at } => write!(f, "path: state {index} at {at} is blocked"),
            Self::NotAdjacent { index, from, to } => {
                write!(f, "path: state {index} jumps from {from} to {to}")
            }
            Self::CostMismatch { expected, found } => {
                write!(f, "path: cost {found:?} differs from step sum {expected:?}")
            }
        }
    }
}

impl<C: fmt::Debug> std::error::Error for PathError<C> {}
