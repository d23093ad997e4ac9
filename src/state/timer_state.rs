//! Countdown state record and its transitions
//!
//! [`TimerState`] holds no lock of its own. It is always mutated through
//! [`AppState`](super::AppState), which owns the single mutex guarding it.

use tokio::time::{Duration, Instant};

/// Real time that must pass between two countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Countdown state shared by the request handlers and the countdown task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds left on the countdown
    pub current_time: u64,
    /// Seconds the countdown was last started with
    pub set_time: u64,
    pub is_running: bool,
    /// Baseline for the next tick; always `None` while not running
    pub last_update: Option<Instant>,
}

/// What a single wake of the countdown task did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or nothing left to count down
    Idle,
    /// No baseline yet; `last_update` was set and nothing was decremented
    Baseline,
    /// Less than one tick period has passed since the baseline
    Waiting,
    /// One second was taken off the countdown
    Decremented { remaining: u64 },
}

/// Copy of the observable fields, taken under the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub current_time: u64,
    pub set_time: u64,
    pub is_running: bool,
}

impl TimerSnapshot {
    /// `MM:SS` rendering of the remaining time
    pub fn display_time(&self) -> String {
        format_display_time(self.current_time)
    }
}

impl TimerState {
    /// Create a stopped timer with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set and start a countdown of `total_seconds`
    pub fn start(&mut self, total_seconds: u64, now: Instant) {
        self.set_time = total_seconds;
        self.current_time = total_seconds;
        self.is_running = true;
        self.last_update = Some(now);
    }

    /// Stop the countdown and clear the remaining time
    pub fn stop(&mut self) {
        self.current_time = 0;
        self.is_running = false;
        self.last_update = None;
    }

    /// Flip between running and paused, returning the new running flag
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        self.is_running = !self.is_running;
        self.last_update = self.is_running.then_some(now);
        self.is_running
    }

    /// Rewind to the last started duration without running it.
    /// Returns the restored number of seconds.
    pub fn reset(&mut self) -> u64 {
        self.current_time = self.set_time;
        self.is_running = false;
        self.last_update = None;
        self.set_time
    }

    /// Advance the countdown as seen at `now`.
    ///
    /// At most one second is taken off per call, and only once a full
    /// [`TICK_PERIOD`] has passed since the previous baseline. The baseline
    /// then moves to `now`, so a late wake never counts more than once.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if !self.is_running || self.current_time == 0 {
            return TickOutcome::Idle;
        }

        let Some(last_update) = self.last_update else {
            self.last_update = Some(now);
            return TickOutcome::Baseline;
        };

        if now.saturating_duration_since(last_update) < TICK_PERIOD {
            return TickOutcome::Waiting;
        }

        self.current_time = self.current_time.saturating_sub(1);
        self.last_update = Some(now);
        TickOutcome::Decremented {
            remaining: self.current_time,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            current_time: self.current_time,
            set_time: self.set_time,
            is_running: self.is_running,
        }
    }
}

/// Combine minutes and seconds into a total without normalising them.
/// `None` if the total does not fit.
pub fn total_seconds(minutes: u64, seconds: u64) -> Option<u64> {
    minutes.checked_mul(60)?.checked_add(seconds)
}

/// Render seconds as `MM:SS`. Minutes wrap at 60 since there is no hour field.
pub fn format_display_time(total_seconds: u64) -> String {
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
