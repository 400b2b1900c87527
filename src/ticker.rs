use std::time::{Duration, Instant};

/// How often console loops poll for key presses, in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// Converts wall-clock time into whole-second steps.
///
/// Leftover fractions carry over to the next call, so a slow poll loop
/// does not lose seconds.
#[derive(Debug)]
pub struct SecondTicker {
    last: Instant,
}

impl Default for SecondTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl SecondTicker {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(last: Instant) -> Self {
        Self { last }
    }

    /// Forget any partial second, e.g. after the timer was paused
    pub fn restart(&mut self) {
        self.last = Instant::now();
    }

    /// Number of whole seconds elapsed since the previous call
    pub fn elapsed_steps(&mut self) -> u64 {
        self.steps_at(Instant::now())
    }

    fn steps_at(&mut self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.last);
        let steps = elapsed.as_secs();
        self.last += Duration::from_secs(steps);
        steps
    }
}
