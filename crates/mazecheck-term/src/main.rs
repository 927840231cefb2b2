//! mazecheck — animate a search over a sample maze and compare its result
//! with the reference shortest path.
//!
//! Usage: `mazecheck [1-5] [--astar] [--drain] [--scroll] [--delay-ms N]`

use std::time::Duration;

use mazecheck_core::samples;
use mazecheck_paths::{
    Expansion, execute_print_iterator_search, manhattan, reference_search, verify_path,
};
use mazecheck_term::{ClearMode, DEFAULT_DELAY, TerminalSink};

/// Command-line options.
struct Args {
    maze: usize,
    astar: bool,
    drain: bool,
    mode: ClearMode,
    delay: Duration,
}

impl Args {
    fn parse() -> Result<Self, Box<dyn std::error::Error>> {
        let mut args = Self {
            maze: 1,
            astar: false,
            drain: false,
            mode: ClearMode::Redraw,
            delay: DEFAULT_DELAY,
        };
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--astar" => args.astar = true,
                "--drain" => args.drain = true,
                "--scroll" => args.mode = ClearMode::Scroll,
                "--delay-ms" => {
                    let ms = it.next().ok_or("--delay-ms needs a value")?.parse()?;
                    args.delay = Duration::from_millis(ms);
                }
                n => args.maze = n.parse()?,
            }
        }
        Ok(args)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse()?;
    let maze = samples::by_number(args.maze)
        .ok_or_else(|| format!("no sample maze {}, expected 1-5", args.maze))?;

    let sink = TerminalSink::new()
        .with_delay(args.delay)
        .with_mode(args.mode);
    let exit_when_goal_reached = !args.drain;

    let found = if args.astar {
        let heuristic = |a, b| f64::from(manhattan(a, b));
        let nodes = Expansion::astar(&maze, 1.0, heuristic);
        execute_print_iterator_search(nodes, &maze, sink, exit_when_goal_reached)?
    } else {
        let nodes = Expansion::uniform(&maze, 1.0);
        execute_print_iterator_search(nodes, &maze, sink, exit_when_goal_reached)?
    };
    verify_path(&found, &maze, 1.0)?;

    let reference = reference_search(&maze, 1.0);
    println!("search:    cost {} over {} states", found.cost(), found.len());
    println!("reference: cost {} over {} states", reference.cost(), reference.len());
    if found.cost() != reference.cost() {
        return Err(format!(
            "cost mismatch: search {} vs reference {}",
            found.cost(),
            reference.cost()
        )
        .into());
    }
    Ok(())
}
