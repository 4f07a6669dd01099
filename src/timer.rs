use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// A stopwatch for timing a single region of code.
pub struct Timer {
    start: Instant,
    elapsed: Option<Duration>,
}

impl Timer {
    /// Creates a timer that is already running.
    pub fn new() -> Self {
        Timer { start: Instant::now(), elapsed: None }
    }

    /// Stops the timer and returns the time since it was created. Later calls return the same
    /// duration.
    pub fn end(&mut self) -> Duration {
        let start = self.start;
        *self.elapsed.get_or_insert_with(|| start.elapsed())
    }

    /// Time since creation, or the stopped duration once `end` has been called.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start.elapsed())
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Timer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Time: {:.3} msec.", self.elapsed().as_secs_f64() * 1000.0)
    }
}
