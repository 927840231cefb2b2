//! A lazy best-first expansion stream over a maze.
//!
//! [`Expansion`] is the kind of node stream the driver consumes: every call
//! to `next` closes one more state and returns its [`PathNode`]. With a zero
//! heuristic it expands in uniform-cost order, with an admissible one it is
//! A*. Nothing is expanded ahead of the caller's pulls.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use mazecheck_core::{Maze, Point};

use crate::cost::Cost;
use crate::node::PathNode;

/// Heuristic signature: estimated cost from a state to the goal.
pub type Heuristic<C> = fn(Point, Point) -> C;

/// Open-list entry, ordered so that `BinaryHeap` pops the smallest `f`
/// first and, among equal `f`, the oldest entry.
struct Entry<C> {
    f: C,
    seq: u64,
    node: Rc<PathNode<Point, C>>,
}

impl<C: PartialOrd> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<C: PartialOrd> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd> Eq for Entry<C> {}

/// Lazily expanded best-first search from the maze start.
///
/// Every step between neighbouring passable cells costs `step`. The stream
/// yields each reachable state exactly once and ends when the open list is
/// empty, so on a maze with an unreachable goal it runs dry.
pub struct Expansion<'m, C, H = Heuristic<C>> {
    maze: &'m Maze,
    step: C,
    heuristic: H,
    open: BinaryHeap<Entry<C>>,
    best: Vec<C>,
    closed: Vec<bool>,
    seq: u64,
}

impl<'m, C: Cost> Expansion<'m, C> {
    /// Uniform-cost (Dijkstra) expansion order.
    pub fn uniform(maze: &'m Maze, step: C) -> Self {
        fn zero<C: Cost>(_: Point, _: Point) -> C {
            C::ZERO
        }
        Self::astar(maze, step, zero::<C> as Heuristic<C>)
    }
}

impl<'m, C: Cost, H: Fn(Point, Point) -> C> Expansion<'m, C, H> {
    /// A* expansion order guided by `heuristic(state, goal)`.
    ///
    /// # Panics
    ///
    /// If `step` is negative or not comparable to zero.
    pub fn astar(maze: &'m Maze, step: C, heuristic: H) -> Self {
        assert!(step >= C::ZERO, "step cost must be non-negative, got {step:?}");
        let len = maze.bounds().len();
        let mut e = Self {
            maze,
            step,
            heuristic,
            open: BinaryHeap::new(),
            best: vec![C::INFINITY; len],
            closed: vec![false; len],
            seq: 0,
        };
        let start = maze.start();
        if let Some(si) = maze.bounds().index(start) {
            e.best[si] = C::ZERO;
            let f = (e.heuristic)(start, maze.goal());
            e.push(PathNode::root(start, C::ZERO), f);
        }
        e
    }

    /// Number of entries waiting in the open list.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    fn push(&mut self, node: Rc<PathNode<Point, C>>, f: C) {
        self.open.push(Entry {
            f,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }
}

impl<C: Cost, H: Fn(Point, Point) -> C> Iterator for Expansion<'_, C, H> {
    type Item = Rc<PathNode<Point, C>>;

    fn next(&mut self) -> Option<Self::Item> {
        let bounds = self.maze.bounds();
        let goal = self.maze.goal();
        loop {
            let Entry { node, .. } = self.open.pop()?;
            let cp = *node.state();
            let Some(ci) = bounds.index(cp) else {
                continue;
            };
            // Skip stale entries.
            if self.closed[ci] {
                continue;
            }
            self.closed[ci] = true;

            let g = *node.cost();
            for np in self.maze.neighbors(cp) {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if self.closed[ni] {
                    continue;
                }
                let tentative = g.add_saturating(self.step);
                if tentative.partial_cmp(&self.best[ni]) != Some(Ordering::Less) {
                    continue;
                }
                self.best[ni] = tentative;
                let f = tentative.add_saturating((self.heuristic)(np, goal));
                self.push(PathNode::child(&node, np, tentative), f);
            }
            return Some(node);
        }
    }
}
