//! Benchmark maze literals.
//!
//! These are the reference layouts the search harness is exercised with.
//! [`MAZE_1`] is the small wall-detour case, [`MAZE_2`] a narrow corridor
//! labyrinth, and [`MAZE_3`] to [`MAZE_5`] open fields with growing
//! obstacles between start and goal.

use crate::maze::Maze;

/// 6×8 field with a three-cell wall between start and goal.
pub const MAZE_1: [&str; 6] = [
    "        ",
    "    X   ",
    "  @ X O ",
    "    X   ",
    "        ",
    "        ",
];

pub const MAZE_2: [&str; 20] = [
    "XX@XXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
    "XX XXXXXXXXXXXXX     XXXXXXXXXXX",
    "XX    XXXXXXXXXX XXX XX     XXXX",
    "XXXXX  XXXXXX    XXX XX XXX XXXX",
    "XXX XX XXXXXX XX XXX XX  XX XXXX",
    "XXX     XXXXX XXXXXX XXXXXX XXXX",
    "XXXXXXX       XXXXXX        XXXX",
    "XXXXXXXXXX XXXXX XXXXXXXXXXXXXXX",
    "XXXXXXXXXX XX    XXXXX      XXXX",
    "XXXXXXXXXX    XXXXXXXX XXXX XXXX",
    "XXXXXXXXXXX XXXXXXXXXX XXXX XXXX",
    "XXXXXXXXXXX            XXXX XXXX",
    "XXXXXXXXXXXXXXXXXXXXXXXX XX XXXX",
    "XXXXXX              XXXX XX XXXX",
    "XXXXXX XXXXXXXXXXXX XX      XXXX",
    "XXXXXX XXO   XXXXXX XXXX XXXXXXX",
    "XXXXXX XXXXX   XXX            XX",
    "XXXXXX XXXXXXX XXXXXXXXXXX XXXXX",
    "XXXXXX XXXXXXX XXXXXXXXXXXXXXXXX",
    "XXXXXX            XXXXXXXXXXXXXX",
];

pub const MAZE_3: [&str; 13] = [
    "                      O          ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "           @                     ",
    "                                 ",
];

pub const MAZE_4: [&str; 13] = [
    "                      O          ",
    "                                 ",
    "                                 ",
    "                                 ",
    "                                 ",
    "     XXXXXXXXXXXXXXXXXXXXX       ",
    "     XXXXXXXXXXXXXXXXXXXXX       ",
    "                       XXX       ",
    "                       XXX       ",
    "                       XXX       ",
    "                       XXX       ",
    "           @                     ",
    "                                 ",
];

pub const MAZE_5: [&str; 13] = [
    "                  X   O          ",
    "                  X              ",
    "                  XXXXXXXX       ",
    "       XXXXXXXXXX  XXXXX         ",
    "                X    XXXXXXXXXX  ",
    "     XXXXXX  XXXXXXX  XXXX       ",
    "     XXXXXX XXXXXXX  XXXXX       ",
    "                       XXX       ",
    "                       XXX       ",
    "                       XXX       ",
    "                       XXX       ",
    "           @                     ",
    "                                 ",
];

/// All sample literals, in order.
pub fn literals() -> [&'static [&'static str]; 5] {
    [&MAZE_1, &MAZE_2, &MAZE_3, &MAZE_4, &MAZE_5]
}

/// All sample mazes, parsed.
pub fn all() -> Vec<Maze> {
    literals()
        .into_iter()
        .filter_map(|lines| Maze::from_lines(lines).ok())
        .collect()
}

/// Sample maze by 1-based number, as used on the command line.
pub fn by_number(n: usize) -> Option<Maze> {
    let lines = *literals().get(n.checked_sub(1)?)?;
    Maze::from_lines(lines).ok()
}
