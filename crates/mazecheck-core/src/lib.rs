//! **mazecheck-core** — grid maze model for cross-validating path searches.
//!
//! This crate provides the foundational types shared by the *mazecheck*
//! workspace: geometry primitives, the immutable [`Maze`] grid with its
//! text rendering, and the sample maze literals.

pub mod geom;
pub mod maze;
pub mod samples;

pub use geom::{Point, Range};
pub use maze::{CellKind, Maze, MazeError, Overlay};
