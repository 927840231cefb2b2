//! The grid maze model.
//!
//! A [`Maze`] is parsed from an ASCII literal where every line is one row:
//!
//! | char  | cell |
//! |-------|------|
//! | `' '` | [`CellKind::Free`] |
//! | `'X'` | [`CellKind::Blocked`] |
//! | `'@'` | [`CellKind::Start`] |
//! | `'O'` | [`CellKind::Goal`] |
//!
//! Exactly one start and one goal are required, and all lines must have the
//! same width. Once built, a maze never changes; visual annotations go
//! through [`Overlay`]s passed to [`Maze::render`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// The kind of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Blocked,
    Start,
    Goal,
}

impl CellKind {
    /// Parse a literal character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::Free),
            'X' => Some(Self::Blocked),
            '@' => Some(Self::Start),
            'O' => Some(Self::Goal),
            _ => None,
        }
    }

    /// The character used when rendering without overlays.
    pub const fn to_char(self) -> char {
        match self {
            Self::Free => ' ',
            Self::Blocked => 'X',
            Self::Start => '@',
            Self::Goal => 'O',
        }
    }

    /// Whether a search may step onto a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// A sparse coordinate → character replacement used when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    cells: HashMap<Point, char>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// An overlay marking every point of `points` with `ch`.
    pub fn fill<'a>(points: impl IntoIterator<Item = &'a Point>, ch: char) -> Self {
        points.into_iter().map(|&p| (p, ch)).collect()
    }

    /// Mark `p` with `ch`, replacing any previous mark.
    pub fn set(&mut self, p: Point, ch: char) {
        self.cells.insert(p, ch);
    }

    pub fn get(&self, p: Point) -> Option<char> {
        self.cells.get(&p).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.cells.iter().map(|(&p, &ch)| (p, ch))
    }
}

impl FromIterator<(Point, char)> for Overlay {
    fn from_iter<I: IntoIterator<Item = (Point, char)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Point, char)> for Overlay {
    fn extend<I: IntoIterator<Item = (Point, char)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A rectangular grid of cells with exactly one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<CellKind>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Build a maze from its literal rows.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, MazeError> {
        if lines.iter().all(|l| l.as_ref().is_empty()) {
            return Err(MazeError::Empty);
        }
        // An empty first row next to a non-empty one is reported as a width
        // mismatch by the row loop.
        let width = lines[0].as_ref().chars().count();

        let mut cells = Vec::with_capacity(width * lines.len());
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        for (y, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::NotRectangular {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = CellKind::from_char(ch).ok_or(MazeError::InvalidChar { ch, pos })?;
                match kind {
                    CellKind::Start => {
                        if let Some(first) = start {
                            return Err(MazeError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    CellKind::Goal => {
                        if let Some(first) = goal {
                            return Err(MazeError::DuplicateGoal { first, second: pos });
                        }
                        goal = Some(pos);
                    }
                    _ => {}
                }
                cells.push(kind);
            }
        }

        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, lines.len() as i32),
            start: start.ok_or(MazeError::MissingStart)?,
            goal: goal.ok_or(MazeError::MissingGoal)?,
        })
    }

    /// Parse a newline-separated literal. Lines are not trimmed, since
    /// leading and trailing spaces are free cells.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = s.lines().collect();
        Self::from_lines(&lines)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a `Point` (x = columns, y = rows).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<CellKind> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the maze and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(CellKind::is_passable)
    }

    /// Passable 4-neighbours of `p`, in the order up, right, down, left.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.is_passable(n))
            .collect()
    }

    /// Every passable coordinate, in row-major order.
    pub fn passable_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds.iter().filter(move |&p| self.is_passable(p))
    }

    /// Render the maze as text, one line per row.
    ///
    /// Overlays are applied in order, so a later overlay's character wins
    /// over an earlier one. Overlay points outside the maze are ignored.
    pub fn render<'a>(&self, overlays: impl IntoIterator<Item = &'a Overlay>) -> String {
        let mut chars: Vec<char> = self.cells.iter().map(|c| c.to_char()).collect();
        for overlay in overlays {
            for (p, ch) in overlay.iter() {
                if let Some(i) = self.bounds.index(p) {
                    chars[i] = ch;
                }
            }
        }
        let w = self.width() as usize;
        let mut out = String::with_capacity(chars.len() + self.height() as usize);
        for (y, row) in chars.chunks(w).enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row);
        }
        out
    }

    /// The literal rows this maze was built from.
    pub fn to_lines(&self) -> Vec<String> {
        self.render([]).lines().map(str::to_owned).collect()
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render([]))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_lines(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = <Vec<String> as serde::Deserialize>::deserialize(deserializer)?;
        Maze::from_lines(&lines).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A maze literal that violates the grid invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row's width differs from the first row's.
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the maze alphabet.
    InvalidChar { ch: char, pos: Point },
    MissingStart,
    DuplicateStart { first: Point, second: Point },
    MissingGoal,
    DuplicateGoal { first: Point, second: Point },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty literal"),
            Self::NotRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "maze: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "maze: no start cell '@'"),
            Self::DuplicateStart { first, second } => {
                write!(f, "maze: second start cell at {second} (first at {first})")
            }
            Self::MissingGoal => write!(f, "maze: no goal cell 'O'"),
            Self::DuplicateGoal { first, second } => {
                write!(f, "maze: second goal cell at {second} (first at {first})")
            }
        }
    }
}

impl std::error::Error for MazeError {}
