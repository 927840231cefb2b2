//! Crossterm render sink for mazecheck.
//!
//! Provides a [`TerminalSink`] that implements
//! [`mazecheck_paths::RenderSink`], drawing each search step to a terminal
//! and pausing a fixed delay between steps.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, ClearType},
};

use mazecheck_paths::RenderSink;

/// Default pause between two frames.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(20);

/// How the sink makes room for a new frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearMode {
    /// Move the cursor back over the previous frame and erase it. The
    /// height comes from the last presented frame, so the line count passed
    /// to `clear` is not used.
    #[default]
    Redraw,
    /// Print the requested number of blank lines, scrolling old frames up.
    Scroll,
}

/// A terminal back-end for the printing search driver.
pub struct TerminalSink<W: Write = Stdout> {
    out: W,
    delay: Duration,
    mode: ClearMode,
    last_height: usize,
}

impl TerminalSink<Stdout> {
    /// A sink writing to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalSink<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            delay: DEFAULT_DELAY,
            mode: ClearMode::default(),
            last_height: 0,
        }
    }

    /// Configure the pause between frames.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_mode(mut self, mode: ClearMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn try_clear(&mut self, lines: usize) -> io::Result<()> {
        match self.mode {
            ClearMode::Redraw => {
                if self.last_height > 0 {
                    let up = self.last_height.min(u16::MAX as usize) as u16;
                    queue!(
                        self.out,
                        cursor::MoveToPreviousLine(up),
                        terminal::Clear(ClearType::FromCursorDown)
                    )?;
                }
            }
            ClearMode::Scroll => {
                queue!(self.out, Print("\n".repeat(lines)))?;
            }
        }
        self.last_height = 0;
        Ok(())
    }

    fn try_present(&mut self, frame: &str) -> io::Result<()> {
        for line in frame.lines() {
            queue!(self.out, Print(line), Print("\n"))?;
        }
        self.last_height = frame.lines().count();
        self.out.flush()
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn clear(&mut self, lines: usize) {
        if let Err(e) = self.try_clear(lines) {
            log::warn!("terminal clear failed: {e}");
        }
    }

    fn present(&mut self, frame: &str) {
        if let Err(e) = self.try_present(frame) {
            log::warn!("terminal write failed: {e}");
        }
    }

    fn pause(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
