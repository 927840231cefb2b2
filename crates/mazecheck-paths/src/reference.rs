//! Reference shortest paths.
//!
//! The reference computation does not share any code path with the searches
//! under test: the maze is first turned into an explicit directed graph of
//! [`WeightedEdge`]s, and Dijkstra runs over that graph. Its result is the
//! ground truth incremental searches are compared against.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mazecheck_core::{Maze, Point, Range};

use crate::cost::Cost;
use crate::result::SearchResult;

/// A directed, weighted transition between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge<C> {
    pub source: Point,
    pub target: Point,
    pub cost: C,
}

/// Reference into the vertex array, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy)]
struct NodeRef<C> {
    idx: usize,
    cost: C,
}

impl<C: PartialOrd> Ord for NodeRef<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest, then the
        // lowest index, first.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl<C: PartialOrd> PartialOrd for NodeRef<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd> PartialEq for NodeRef<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd> Eq for NodeRef<C> {}

// ---------------------------------------------------------------------------
// MazeGraph
// ---------------------------------------------------------------------------

/// The traversable transitions of a maze as an explicit graph.
///
/// Vertices are the passable cells. For every ordered pair of adjacent
/// passable cells there is one edge weighted by the uniform step cost.
#[derive(Debug, Clone)]
pub struct MazeGraph<C> {
    bounds: Range,
    vertices: Vec<Point>,
    edges: Vec<WeightedEdge<C>>,
    // outgoing edge indices, per cell of `bounds`
    outgoing: Vec<Vec<usize>>,
}

impl<C: Cost> MazeGraph<C> {
    /// Build the graph of `maze` with every step costing `step`.
    ///
    /// # Panics
    ///
    /// If `step` is negative or not comparable to zero.
    pub fn from_maze(maze: &Maze, step: C) -> Self {
        assert!(step >= C::ZERO, "step cost must be non-negative, got {step:?}");
        let bounds = maze.bounds();
        let mut outgoing = vec![Vec::new(); bounds.len()];
        let mut vertices = Vec::new();
        let mut edges = Vec::new();

        for p in maze.passable_points() {
            vertices.push(p);
            let Some(pi) = bounds.index(p) else {
                continue;
            };
            for n in maze.neighbors(p) {
                outgoing[pi].push(edges.len());
                edges.push(WeightedEdge {
                    source: p,
                    target: n,
                    cost: step,
                });
            }
        }
        log::debug!(
            "reference graph: {} vertices, {} edges",
            vertices.len(),
            edges.len()
        );

        Self {
            bounds,
            vertices,
            edges,
            outgoing,
        }
    }

    /// Passable cells, in row-major order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn edges(&self) -> &[WeightedEdge<C>] {
        &self.edges
    }

    pub fn contains(&self, p: Point) -> bool {
        self.vertices.binary_search(&p).is_ok()
    }

    /// Edges leaving `p`.
    pub fn outgoing(&self, p: Point) -> impl Iterator<Item = &WeightedEdge<C>> + '_ {
        let list: &[usize] = match self.bounds.index(p) {
            Some(i) => self.outgoing[i].as_slice(),
            None => &[],
        };
        list.iter().map(move |&ei| &self.edges[ei])
    }

    /// Edges of a cheapest path from `from` to `to`, in walking order.
    ///
    /// Empty when `to` is unreachable or equal to `from`. Among several
    /// cheapest paths the choice is deterministic for a given graph.
    pub fn shortest_path(&self, from: Point, to: Point) -> Vec<WeightedEdge<C>> {
        let (Some(si), Some(ti)) = (self.bounds.index(from), self.bounds.index(to)) else {
            return Vec::new();
        };
        if si == ti || !self.contains(from) || !self.contains(to) {
            return Vec::new();
        }

        let len = self.bounds.len();
        let mut dist = vec![C::INFINITY; len];
        let mut via: Vec<Option<usize>> = vec![None; len];
        let mut done = vec![false; len];

        let mut open: BinaryHeap<NodeRef<C>> = BinaryHeap::new();
        dist[si] = C::ZERO;
        open.push(NodeRef {
            idx: si,
            cost: C::ZERO,
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if done[ci] {
                continue;
            }
            done[ci] = true;
            if ci == ti {
                break;
            }

            for &ei in &self.outgoing[ci] {
                let edge = &self.edges[ei];
                let Some(ni) = self.bounds.index(edge.target) else {
                    continue;
                };
                if done[ni] {
                    continue;
                }
                let tentative = dist[ci].add_saturating(edge.cost);
                if tentative.partial_cmp(&dist[ni]) != Some(Ordering::Less) {
                    continue;
                }
                dist[ni] = tentative;
                via[ni] = Some(ei);
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = ti;
        while let Some(ei) = via[ci] {
            let edge = self.edges[ei];
            path.push(edge);
            match self.bounds.index(edge.source) {
                Some(pi) => ci = pi,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Compute the reference result for `maze` over a prebuilt `graph`.
///
/// Returns [`SearchResult::NO_RESULT`] when the goal is unreachable.
/// Otherwise the path lists every edge source in order followed by the
/// goal, and the cost is the sum of the edge weights.
pub fn execute_reference_search<C: Cost>(
    graph: &MazeGraph<C>,
    maze: &Maze,
) -> SearchResult<Point, C> {
    let edges = graph.shortest_path(maze.start(), maze.goal());
    if edges.is_empty() {
        return SearchResult::NO_RESULT;
    }
    let mut cost = C::ZERO;
    let mut path = Vec::with_capacity(edges.len() + 1);
    for edge in &edges {
        path.push(edge.source);
        cost = cost.add_saturating(edge.cost);
    }
    path.push(maze.goal());
    SearchResult::new(path, cost)
}

/// Build the graph of `maze` and compute its reference result.
pub fn reference_search<C: Cost>(maze: &Maze, step: C) -> SearchResult<Point, C> {
    execute_reference_search(&MazeGraph::from_maze(maze, step), maze)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(lines: &[&str]) -> Maze {
        Maze::from_lines(lines).unwrap()
    }

    #[test]
    fn graph_has_one_edge_per_ordered_adjacent_pair() {
        let m = maze(&["@ X", "  O"]);
        let g = MazeGraph::from_maze(&m, 1.0);
        assert_eq!(g.vertices().len(), 5);
        // Undirected adjacencies: (0,0)-(1,0), (0,0)-(0,1), (1,0)-(1,1),
        // (0,1)-(1,1), (1,1)-(2,1).
        assert_eq!(g.edges().len(), 10);
        for e in g.edges() {
            assert!(e.source.is_adjacent(e.target));
            assert!(g.edges().contains(&WeightedEdge {
                source: e.target,
                target: e.source,
                cost: e.cost,
            }));
        }
        assert!(!g.contains(Point::new(2, 0)));
        assert_eq!(g.outgoing(Point::new(2, 0)).count(), 0);
        assert_eq!(g.outgoing(Point::new(1, 1)).count(), 3);
    }

    #[test]
    fn straight_corridor() {
        let m = maze(&["@   O"]);
        let r = reference_search(&m, 1.0);
        assert_eq!(r.len(), 5);
        assert_eq!(r.cost(), 4.0);
        assert_eq!(r.path().first(), Some(&m.start()));
        assert_eq!(r.path().last(), Some(&m.goal()));
    }

    #[test]
    fn cost_scales_with_step() {
        let m = maze(&["@   O"]);
        assert_eq!(reference_search(&m, 2.5).cost(), 10.0);
        assert_eq!(reference_search(&m, 3_u32).cost(), 12);
    }

    #[test]
    fn detours_around_walls() {
        let m = maze(&["@ X  ", "  X  ", "    O"]);
        let r = reference_search(&m, 1);
        assert_eq!(r.cost(), 6);
        assert_eq!(r.len(), 7);
        assert!(r.path().windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(r.path().iter().all(|&p| m.is_passable(p)));
    }

    #[test]
    fn unreachable_goal_is_no_result() {
        let m = maze(&["@ X  ", "  X O", "  X  "]);
        let r = reference_search(&m, 1.0);
        assert_eq!(r, SearchResult::NO_RESULT);
        assert!(r.is_no_result());
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_step_is_rejected() {
        let m = maze(&["@ O"]);
        MazeGraph::from_maze(&m, -2.0);
    }

    #[test]
    fn saturated_cost_is_no_result() {
        let m = maze(&["@   O"]);
        assert_eq!(reference_search(&m, u32::MAX / 2), SearchResult::NO_RESULT);
        assert_eq!(reference_search(&m, u32::MAX / 8).cost(), u32::MAX / 8 * 4);
    }

    #[test]
    fn shortest_path_edges_chain() {
        let m = maze(&["@ O"]);
        let g = MazeGraph::from_maze(&m, 1);
        let edges = g.shortest_path(m.start(), m.goal());
        assert_eq!(
            edges,
            vec![
                WeightedEdge {
                    source: Point::new(0, 0),
                    target: Point::new(1, 0),
                    cost: 1
                },
                WeightedEdge {
                    source: Point::new(1, 0),
                    target: Point::new(2, 0),
                    cost: 1
                },
            ]
        );
        assert!(g.shortest_path(m.start(), m.start()).is_empty());
        assert!(g.shortest_path(m.start(), Point::new(7, 7)).is_empty());
    }

    #[test]
    fn repeated_runs_agree() {
        let m = maze(&["     ", " X X ", "@   O", " X X ", "     "]);
        let g = MazeGraph::from_maze(&m, 1.0);
        let a = execute_reference_search(&g, &m);
        let b = execute_reference_search(&g, &m);
        let c = reference_search(&m, 1.0);
        assert_eq!(a.cost(), 4.0);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}
