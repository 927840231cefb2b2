//! Execution and cross-validation of path searches on grid mazes.
//!
//! A search under test is observed only through the lazy stream of
//! [`PathNode`]s it expands. This crate provides:
//!
//! - the **driver** that consumes such a stream and extracts a
//!   [`SearchResult`] ([`execute_iterator_search`],
//!   [`execute_print_iterator_search`])
//! - the **reference computation**, Dijkstra over an explicit
//!   [`MazeGraph`] ([`reference_search`])
//! - a lazy best-first [`Expansion`] stream to feed the driver
//! - [`verify_path`] to check a result against the maze
//!
//! # Example
//!
//! ```
//! use mazecheck_core::samples;
//! use mazecheck_paths::{Expansion, execute_iterator_search, reference_search};
//!
//! let maze = samples::by_number(1).unwrap();
//! let found = execute_iterator_search(Expansion::uniform(&maze, 1.0), &maze).unwrap();
//! assert_eq!(found.cost(), reference_search(&maze, 1.0).cost());
//! ```

mod cost;
mod distance;
mod driver;
mod expand;
mod node;
mod reference;
mod result;
mod sink;
mod verify;

pub use cost::Cost;
pub use distance::manhattan;
pub use driver::{
    PrintOptions, SearchError, execute_iterator_search, execute_print_iterator_search,
    execute_print_iterator_search_with, render_step,
};
pub use expand::{Expansion, Heuristic};
pub use node::{Ancestors, PathNode};
pub use reference::{MazeGraph, WeightedEdge, execute_reference_search, reference_search};
pub use result::SearchResult;
pub use sink::{NullSink, RecordingSink, RenderSink};
pub use verify::{PathError, verify_path};
