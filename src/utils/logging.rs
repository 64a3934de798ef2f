use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Scoped timer for one input event, traced on entry and exit.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!("end {} ({} µs)", self.label, self.start.elapsed().as_micros());
        }
    }
}

/// Warns when handling a single event took longer than a frame.
pub fn warn_if_frame_budget_exceeded(label: &str, duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("{label} exceeded frame budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}
