//! Error types for the countdown core

/// Failures surfaced by [`AppState`](crate::state::AppState) operations
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    /// A thread panicked while holding the timer lock
    #[error("failed to lock timer state: {0}")]
    LockPoisoned(String),

    /// The requested minutes and seconds do not fit in a second counter
    #[error("duration of {minutes} minutes and {seconds} seconds is too large")]
    DurationOverflow { minutes: u64, seconds: u64 },
}
