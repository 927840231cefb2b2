//! Execution of incremental searches.
//!
//! A search under test is seen only through the lazy stream of nodes it
//! expands. The driver pulls that stream one node at a time, stops at the
//! first node whose state is the maze goal, and turns it into a
//! [`SearchResult`]. The path is rebuilt from the node's parent chain and
//! the cost is taken from the node as is.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use mazecheck_core::{Maze, Overlay, Point};

use crate::cost::Cost;
use crate::node::PathNode;
use crate::result::SearchResult;
use crate::sink::RenderSink;

/// Run a search until its first node at the goal.
///
/// Nodes after the goal node are never pulled, so `nodes` may be infinite.
/// Fails with [`SearchError::GoalUnreached`] when the stream ends first.
pub fn execute_iterator_search<I, N, C>(
    nodes: I,
    maze: &Maze,
) -> Result<SearchResult<Point, C>, SearchError>
where
    I: IntoIterator<Item = N>,
    N: Borrow<PathNode<Point, C>>,
    C: Cost,
{
    let goal = maze.goal();
    let mut steps = 0;
    for node in nodes {
        let node = node.borrow();
        steps += 1;
        log::trace!("step {steps}: expanded {}", node.state());
        if *node.state() == goal {
            log::debug!("goal {goal} reached after {steps} steps");
            return Ok(SearchResult::new(node.path(), *node.cost()));
        }
    }
    log::warn!("node stream ended after {steps} steps without reaching {goal}");
    Err(SearchError::GoalUnreached { steps })
}

/// Run a search while drawing every step to `sink`.
///
/// Uses the default [`PrintOptions`]. See
/// [`execute_print_iterator_search_with`].
pub fn execute_print_iterator_search<I, N, C, R>(
    nodes: I,
    maze: &Maze,
    sink: R,
    exit_when_goal_reached: bool,
) -> Result<SearchResult<Point, C>, SearchError>
where
    I: IntoIterator<Item = N>,
    N: Borrow<PathNode<Point, C>>,
    C: Cost,
    R: RenderSink,
{
    execute_print_iterator_search_with(
        nodes,
        maze,
        sink,
        exit_when_goal_reached,
        &PrintOptions::default(),
    )
}

/// Run a search while drawing every step to `sink`.
///
/// After each pulled node the sink is cleared, shown the maze with the
/// explored states and the node's path marked, and paused. When
/// `exit_when_goal_reached` is false the stream is drained to its end after
/// the goal is found, and the *first* goal node still decides the result.
pub fn execute_print_iterator_search_with<I, N, C, R>(
    nodes: I,
    maze: &Maze,
    mut sink: R,
    exit_when_goal_reached: bool,
    opts: &PrintOptions,
) -> Result<SearchResult<Point, C>, SearchError>
where
    I: IntoIterator<Item = N>,
    N: Borrow<PathNode<Point, C>>,
    C: Cost,
    R: RenderSink,
{
    let goal = maze.goal();
    let mut steps = 0;
    let mut explored: HashSet<Point> = HashSet::new();
    let mut found: Option<SearchResult<Point, C>> = None;

    for node in nodes {
        let node = node.borrow();
        let state = *node.state();
        explored.insert(state);
        steps += 1;
        log::trace!("step {steps}: expanded {state}");

        let path = node.path();
        sink.clear(opts.clear_lines);
        sink.present(&render_step(maze, &explored, &path, opts));
        sink.pause();

        if state == goal {
            if found.is_none() {
                log::debug!("goal {goal} reached after {steps} steps");
                found = Some(SearchResult::new(path, *node.cost()));
            }
            if exit_when_goal_reached {
                break;
            }
        }
    }

    found.ok_or_else(|| {
        log::warn!("node stream ended after {steps} steps without reaching {goal}");
        SearchError::GoalUnreached { steps }
    })
}

/// The maze with `explored` and `path` marked, path on top.
pub fn render_step<'a>(
    maze: &Maze,
    explored: impl IntoIterator<Item = &'a Point>,
    path: impl IntoIterator<Item = &'a Point>,
    opts: &PrintOptions,
) -> String {
    let explored = Overlay::fill(explored, opts.explored_char);
    let path = Overlay::fill(path, opts.path_char);
    maze.render([&explored, &path])
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Presentation settings for the printing driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintOptions {
    /// Mark for every state pulled so far.
    pub explored_char: char,
    /// Mark for the states on the current node's path.
    pub path_char: char,
    /// Lines the sink is asked to clear before each frame.
    pub clear_lines: usize,
}

impl PrintOptions {
    pub const fn with_explored_char(mut self, ch: char) -> Self {
        self.explored_char = ch;
        self
    }

    pub const fn with_path_char(mut self, ch: char) -> Self {
        self.path_char = ch;
        self
    }

    pub const fn with_clear_lines(mut self, lines: usize) -> Self {
        self.clear_lines = lines;
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            explored_char: '.',
            path_char: '*',
            clear_lines: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A search stream that misbehaved.
///
/// This is distinct from [`SearchResult::NO_RESULT`]: an unreachable goal is
/// a valid outcome of the reference computation, whereas an incremental
/// search that stops without producing the goal is a failure of the search
/// under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The stream ended before any node reached the goal.
    GoalUnreached { steps: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoalUnreached { steps } => {
                write!(f, "solution not found after {steps} steps")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{NullSink, RecordingSink};
    use std::cell::Cell;
    use std::rc::Rc;

    type Node = Rc<PathNode<Point, f64>>;

    // A tiny corridor: start at the left end, goal at the right end.
    fn corridor() -> Maze {
        Maze::from_lines(&["@  O"]).unwrap()
    }

    /// The straight walk along the corridor, one node per cell.
    fn walk(maze: &Maze) -> Vec<Node> {
        let mut nodes = vec![PathNode::root(maze.start(), 0.0)];
        for x in 1..maze.width() {
            let parent = Rc::clone(nodes.last().unwrap());
            nodes.push(PathNode::child(&parent, Point::new(x, 0), x as f64));
        }
        nodes
    }

    #[test]
    fn returns_path_and_cost_of_goal_node() {
        let maze = corridor();
        let result = execute_iterator_search(walk(&maze), &maze).unwrap();
        assert_eq!(
            result.path(),
            [
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
        assert_eq!(result.cost(), 3.0);
    }

    #[test]
    fn trusts_node_cost_verbatim() {
        let maze = corridor();
        let root = PathNode::root(maze.start(), 0.0);
        let goal = PathNode::child(&root, maze.goal(), 42.5);
        let result = execute_iterator_search([root, goal], &maze).unwrap();
        assert_eq!(result.cost(), 42.5);
        assert_eq!(result.path(), [maze.start(), maze.goal()]);
    }

    #[test]
    fn accepts_borrowed_nodes() {
        let maze = corridor();
        let nodes = walk(&maze);
        let result = execute_iterator_search(nodes.iter().map(|n| &**n), &maze).unwrap();
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn stops_pulling_at_first_goal() {
        let maze = corridor();
        let pulled = Cell::new(0);
        let nodes = walk(&maze);
        let goal_node = Rc::clone(nodes.last().unwrap());
        // Infinite: after the walk, the goal node repeats forever.
        let stream = nodes
            .into_iter()
            .chain(std::iter::repeat(goal_node))
            .inspect(|_| pulled.set(pulled.get() + 1));
        let result = execute_iterator_search(stream, &maze).unwrap();
        assert_eq!(result.cost(), 3.0);
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn first_goal_match_wins() {
        let maze = corridor();
        let root = PathNode::root(maze.start(), 0.0);
        let expensive = PathNode::child(&root, maze.goal(), 10.0);
        let cheap = PathNode::child(&root, maze.goal(), 1.0);
        let result = execute_iterator_search([root, expensive, cheap], &maze).unwrap();
        assert_eq!(result.cost(), 10.0);
    }

    #[test]
    fn exhausted_stream_reports_steps() {
        let maze = corridor();
        let nodes = walk(&maze);
        let without_goal = nodes[..3].to_vec();
        let err = execute_iterator_search(without_goal, &maze).unwrap_err();
        assert_eq!(err, SearchError::GoalUnreached { steps: 3 });
        assert_eq!(err.to_string(), "solution not found after 3 steps");
    }

    #[test]
    fn empty_stream_is_goal_unreached() {
        let maze = corridor();
        let err = execute_iterator_search(Vec::<Node>::new(), &maze).unwrap_err();
        assert_eq!(err, SearchError::GoalUnreached { steps: 0 });
    }

    #[test]
    fn print_search_matches_plain_search() {
        let maze = corridor();
        let plain = execute_iterator_search(walk(&maze), &maze).unwrap();
        let printed = execute_print_iterator_search(walk(&maze), &maze, NullSink, true).unwrap();
        assert_eq!(plain, printed);
    }

    #[test]
    fn print_search_draws_every_step() {
        let maze = corridor();
        let mut sink = RecordingSink::new();
        execute_print_iterator_search(walk(&maze), &maze, &mut sink, true).unwrap();
        assert_eq!(sink.frames().len(), 4);
        assert_eq!(sink.clears(), 4);
        assert_eq!(sink.pauses(), 4);
        assert_eq!(sink.frames()[0], "*  O");
        assert_eq!(sink.frames()[1], "** O");
        assert_eq!(sink.last_frame(), Some("****"));
    }

    #[test]
    fn explored_cells_stay_marked_off_path() {
        let maze = Maze::from_lines(&[" @ O"]).unwrap();
        let root = PathNode::root(maze.start(), 0.0);
        let left = PathNode::child(&root, Point::new(0, 0), 1.0);
        let right = PathNode::child(&root, Point::new(2, 0), 1.0);
        let goal = PathNode::child(&right, maze.goal(), 2.0);
        let mut sink = RecordingSink::new();
        let result =
            execute_print_iterator_search(vec![root, left, right, goal], &maze, &mut sink, true)
                .unwrap();
        assert_eq!(result.cost(), 2.0);
        assert_eq!(sink.frames()[1], "** O");
        assert_eq!(sink.last_frame(), Some(".***"));
    }

    #[test]
    fn custom_marks_are_used() {
        let maze = corridor();
        let opts = PrintOptions::default()
            .with_path_char('#')
            .with_explored_char('~')
            .with_clear_lines(3);
        let mut sink = RecordingSink::new();
        execute_print_iterator_search_with(walk(&maze), &maze, &mut sink, true, &opts).unwrap();
        assert_eq!(sink.last_frame(), Some("####"));
    }

    #[test]
    fn drain_mode_pulls_everything_and_keeps_first_result() {
        let maze = corridor();
        let root = PathNode::root(maze.start(), 0.0);
        let first = PathNode::child(&root, maze.goal(), 5.0);
        let mid = PathNode::child(&root, Point::new(1, 0), 1.0);
        let second = PathNode::child(&mid, maze.goal(), 2.0);
        let mut sink = RecordingSink::new();
        let result = execute_print_iterator_search(
            vec![root, first, mid, Rc::clone(&second)],
            &maze,
            &mut sink,
            false,
        )
        .unwrap();
        assert_eq!(sink.frames().len(), 4);
        assert_eq!(result.cost(), 5.0);
        assert_eq!(result.path(), [maze.start(), maze.goal()]);
    }

    #[test]
    fn exit_mode_stops_at_goal() {
        let maze = corridor();
        let pulled = Cell::new(0);
        let nodes = walk(&maze);
        let goal_node = Rc::clone(nodes.last().unwrap());
        let stream = nodes
            .into_iter()
            .chain(std::iter::repeat(goal_node))
            .inspect(|_| pulled.set(pulled.get() + 1));
        execute_print_iterator_search(stream, &maze, NullSink, true).unwrap();
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn print_search_without_goal_fails() {
        let maze = corridor();
        let nodes = walk(&maze)[..2].to_vec();
        let mut sink = RecordingSink::new();
        let err = execute_print_iterator_search(nodes, &maze, &mut sink, false).unwrap_err();
        assert_eq!(err, SearchError::GoalUnreached { steps: 2 });
        assert_eq!(sink.frames().len(), 2);
    }
}
