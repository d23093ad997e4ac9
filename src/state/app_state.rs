//! Main application state management

use std::{
    sync::{Mutex, MutexGuard},
    time::Instant as StdInstant,
};
use tokio::time::Instant;
use tracing::info;

use super::{timer_state::total_seconds, TickOutcome, TimerSnapshot, TimerState};
use crate::error::TimerError;

/// Application state shared between the HTTP handlers and the countdown task.
///
/// The timer record is only reachable through the methods below, each of
/// which holds the lock for its whole read-modify-write and nothing else.
#[derive(Debug)]
pub struct AppState {
    timer_state: Mutex<TimerState>,
    /// Server metadata
    pub start_time: StdInstant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState with a stopped, empty timer
    pub fn new(port: u16, host: String) -> Self {
        Self {
            timer_state: Mutex::new(TimerState::new()),
            start_time: StdInstant::now(),
            port,
            host,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TimerState>, TimerError> {
        self.timer_state
            .lock()
            .map_err(|e| TimerError::LockPoisoned(e.to_string()))
    }

    /// Panic on another thread while holding the timer lock
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        std::thread::scope(|scope| {
            let result = scope
                .spawn(|| {
                    let _guard = self.timer_state.lock();
                    panic!("panicked while holding the timer lock");
                })
                .join();
            assert!(result.is_err());
        });
    }

    /// Read the current countdown as one consistent snapshot
    pub fn status(&self) -> Result<TimerSnapshot, TimerError> {
        Ok(self.lock()?.snapshot())
    }

    /// Start a new countdown of `minutes * 60 + seconds` and return the total
    pub fn start(&self, minutes: u64, seconds: u64) -> Result<u64, TimerError> {
        let total = total_seconds(minutes, seconds)
            .ok_or(TimerError::DurationOverflow { minutes, seconds })?;

        self.lock()?.start(total, Instant::now());

        info!("Timer started for {} seconds", total);
        Ok(total)
    }

    /// Stop the countdown and zero the remaining time
    pub fn stop(&self) -> Result<(), TimerError> {
        self.lock()?.stop();
        info!("Timer stopped");
        Ok(())
    }

    /// Toggle pause. Returns whether the timer is running afterwards.
    pub fn pause_resume(&self) -> Result<bool, TimerError> {
        let is_running = self.lock()?.toggle_pause(Instant::now());
        info!("Timer {}", if is_running { "resumed" } else { "paused" });
        Ok(is_running)
    }

    /// Restore the last started duration, paused. Returns that duration.
    pub fn reset(&self) -> Result<u64, TimerError> {
        let set_time = self.lock()?.reset();
        info!("Timer reset to {} seconds", set_time);
        Ok(set_time)
    }

    /// Run one wake of the countdown as of `now`
    pub fn tick(&self, now: Instant) -> Result<TickOutcome, TimerError> {
        Ok(self.lock()?.tick(now))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Barrier},
        thread,
    };

    use super::*;

    fn test_state() -> AppState {
        AppState::new(5000, "127.0.0.1".to_string())
    }

    #[test]
    fn start_reports_unclamped_total() {
        let state = test_state();
        assert_eq!(state.start(0, 90).unwrap(), 90);

        let snapshot = state.status().unwrap();
        assert_eq!(snapshot.current_time, 90);
        assert_eq!(snapshot.set_time, 90);
        assert!(snapshot.is_running);
        assert_eq!(snapshot.display_time(), "01:30");
    }

    #[test]
    fn start_rejects_overflowing_duration() {
        let state = test_state();
        let err = state.start(u64::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            TimerError::DurationOverflow { minutes: u64::MAX, seconds: 1 }
        ));

        // Nothing changed
        assert_eq!(state.status().unwrap(), TimerState::new().snapshot());
    }

    #[test]
    fn start_then_reset_round_trips() {
        let state = test_state();
        state.start(4, 20).unwrap();
        assert_eq!(state.reset().unwrap(), 260);

        let snapshot = state.status().unwrap();
        assert_eq!(snapshot.current_time, 260);
        assert!(!snapshot.is_running);
    }

    #[test]
    fn pause_resume_toggles() {
        let state = test_state();
        state.start(1, 0).unwrap();
        assert!(!state.pause_resume().unwrap());
        assert!(state.pause_resume().unwrap());
        assert!(state.status().unwrap().is_running);
    }

    #[test]
    fn stop_twice_matches_stop_once() {
        let state = test_state();
        state.start(0, 45).unwrap();
        state.stop().unwrap();
        let once = state.status().unwrap();
        state.stop().unwrap();
        assert_eq!(state.status().unwrap(), once);
        assert_eq!(once.current_time, 0);
    }

    #[test]
    fn concurrent_readers_never_see_a_partial_start() {
        const READERS: usize = 8;

        let state = Arc::new(test_state());
        let before = state.status().unwrap();
        let after = TimerSnapshot {
            current_time: 90,
            set_time: 90,
            is_running: true,
        };
        let barrier = Arc::new(Barrier::new(READERS + 1));

        let readers: Vec<_> = (0..READERS)
            .map(|_| {
                let state = Arc::clone(&state);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let mut reads = 0usize;
                    loop {
                        let snapshot = state.status().unwrap();
                        reads += 1;
                        assert!(
                            snapshot == before || snapshot == after,
                            "observed mixed state: {:?}",
                            snapshot
                        );
                        if snapshot == after {
                            return reads;
                        }
                    }
                })
            })
            .collect();

        barrier.wait();
        state.start(1, 30).unwrap();

        for reader in readers {
            assert!(reader.join().unwrap() >= 1);
        }
        assert_eq!(state.status().unwrap(), after);
    }

    #[test]
    fn poisoned_lock_is_reported_not_panicked() {
        let state = test_state();
        state.start(0, 10).unwrap();
        state.poison();

        assert!(matches!(state.status(), Err(TimerError::LockPoisoned(_))));
        assert!(matches!(
            state.tick(Instant::now()),
            Err(TimerError::LockPoisoned(_))
        ));
        assert!(matches!(state.start(1, 0), Err(TimerError::LockPoisoned(_))));
        assert!(matches!(state.stop(), Err(TimerError::LockPoisoned(_))));
    }

    #[test]
    fn uptime_starts_in_seconds() {
        assert!(test_state().get_uptime().ends_with('s'));
    }
}
