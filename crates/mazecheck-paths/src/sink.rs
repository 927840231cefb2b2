/// Presentation side of a printing search.
///
/// The driver calls [`clear`](Self::clear), then [`present`](Self::present),
/// then [`pause`](Self::pause) once per pulled node. Nothing a sink does is
/// fed back into the search, so a sink that ignores every call leaves the
/// result unchanged.
pub trait RenderSink {
    /// Make room for the next frame.
    ///
    /// `lines` is the number of blank lines the driver asks for. A sink that
    /// can erase its previous frame in place is free to ignore it.
    fn clear(&mut self, lines: usize);

    /// Show one rendered frame.
    fn present(&mut self, frame: &str);

    /// Pace the animation. May block the calling thread.
    fn pause(&mut self) {}
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn clear(&mut self, lines: usize) {
        (**self).clear(lines);
    }

    fn present(&mut self, frame: &str) {
        (**self).present(frame);
    }

    fn pause(&mut self) {
        (**self).pause();
    }
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn clear(&mut self, _lines: usize) {}

    fn present(&mut self, _frame: &str) {}
}

/// A sink that keeps every presented frame in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    frames: Vec<String>,
    clears: usize,
    pauses: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Number of `clear` calls received.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Number of `pause` calls received.
    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, _lines: usize) {
        self.clears += 1;
    }

    fn present(&mut self, frame: &str) {
        self.frames.push(frame.to_owned());
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}
