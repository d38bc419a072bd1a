use std::io::{self, Write};
use std::time::Instant;

use crate::feed::SampleFeed;
use crate::range::RangeTracker;
use crate::window::RollingWindow;

/// Everything the event loop owns: the rolling window, the all-time range,
/// the sample feed and the transient frame flags. The loop passes it by
/// reference into every component call; there are no ambient globals.
pub struct ChartSession {
    window: RollingWindow,
    range: RangeTracker,
    feed: Box<dyn SampleFeed>,
    echo: Option<Box<dyn Write>>,
    paused: bool,
    dirty: bool,
}

impl ChartSession {
    /// `echo`, when set, receives every accepted sample as its own flushed
    /// line (a tee of the input stream).
    pub fn new(
        capacity: usize,
        feed: Box<dyn SampleFeed>,
        echo: Option<Box<dyn Write>>,
    ) -> Self {
        Self {
            window: RollingWindow::new(capacity),
            range: RangeTracker::new(),
            feed,
            echo,
            // dirty so the very first iteration paints a frame
            dirty: true,
            paused: false,
        }
    }

    /// One multiplexer step: asks the feed for a sample and, if one arrived,
    /// echoes it, records it and schedules a redraw. Returns whether a sample
    /// was accepted.
    pub fn ingest(&mut self, now: Instant) -> io::Result<bool> {
        let Some(value) = self.feed.poll(now, self.paused)? else {
            return Ok(false);
        };
        if let Some(echo) = self.echo.as_mut() {
            writeln!(echo, "{value:.6}")?;
            echo.flush()?;
        }
        self.window.push(value);
        self.range.observe(value);
        self.dirty = true;
        Ok(true)
    }

    /// Toggles live-mode sampling. File feeds ignore the flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.dirty = true;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears and returns the redraw flag for this iteration.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }

    pub fn range(&self) -> &RangeTracker {
        &self.range
    }
}
