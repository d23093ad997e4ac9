//! Countdown background task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    time::{interval, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::state::{AppState, TickOutcome};

/// How often the task checks whether a second has passed
pub const WAKE_INTERVAL: Duration = Duration::from_millis(100);

/// Background task that counts the shared timer down.
///
/// Runs until `shutdown` carries `true` or its sender is dropped.
pub async fn countdown_task(state: Arc<AppState>, mut shutdown: watch::Receiver<bool>) {
    info!("Starting countdown task");

    let mut interval = interval(WAKE_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while !*shutdown.borrow() {
        tokio::select! {
            _ = interval.tick() => {
                match state.tick(Instant::now()) {
                    Ok(TickOutcome::Decremented { remaining: 0 }) => {
                        info!("Countdown finished");
                    }
                    Ok(TickOutcome::Decremented { remaining }) => {
                        debug!("Countdown tick, {} seconds remaining", remaining);
                    }
                    Ok(TickOutcome::Baseline) => {
                        debug!("Countdown baseline established");
                    }
                    Ok(TickOutcome::Idle | TickOutcome::Waiting) => {}
                    Err(e) => {
                        // Keep waking; a poisoned lock is reported by every request too
                        error!("Countdown wake failed: {}", e);
                    }
                }
            }

            changed = shutdown.changed() => {
                if changed.is_err() {
                    debug!("Shutdown sender dropped");
                    break;
                }
            }
        }
    }

    info!("Countdown task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn spawn_countdown() -> (Arc<AppState>, watch::Sender<bool>, tokio::task::JoinHandle<()>) {
        let state = Arc::new(AppState::new(5000, "127.0.0.1".to_string()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(countdown_task(Arc::clone(&state), shutdown_rx));
        (state, shutdown_tx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_to_zero_and_holds() {
        let (state, _shutdown, _handle) = spawn_countdown();
        state.start(0, 2).unwrap();

        sleep(Duration::from_millis(1_500)).await;
        assert_eq!(state.status().unwrap().current_time, 1);

        sleep(Duration::from_millis(1_000)).await;
        assert_eq!(state.status().unwrap().current_time, 0);

        sleep(Duration::from_secs(5)).await;
        let snapshot = state.status().unwrap();
        assert_eq!(snapshot.current_time, 0);
        assert_eq!(snapshot.set_time, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn paused_timer_holds_its_time() {
        let (state, _shutdown, _handle) = spawn_countdown();
        state.start(1, 0).unwrap();
        assert!(!state.pause_resume().unwrap());

        sleep(Duration::from_secs(3)).await;

        let snapshot = state.status().unwrap();
        assert_eq!(snapshot.current_time, 60);
        assert!(!snapshot.is_running);
    }

    #[tokio::test(start_paused = true)]
    async fn resumed_timer_continues() {
        let (state, _shutdown, _handle) = spawn_countdown();
        state.start(0, 10).unwrap();
        state.pause_resume().unwrap();
        sleep(Duration::from_secs(3)).await;

        assert!(state.pause_resume().unwrap());
        sleep(Duration::from_millis(3_500)).await;

        assert_eq!(state.status().unwrap().current_time, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_on_shutdown_signal() {
        let (state, shutdown, handle) = spawn_countdown();
        state.start(0, 30).unwrap();
        sleep(Duration::from_millis(1_500)).await;

        shutdown.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("countdown task did not stop")
            .unwrap();

        let remaining = state.status().unwrap().current_time;
        sleep(Duration::from_secs(5)).await;
        assert_eq!(state.status().unwrap().current_time, remaining);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_waking_after_a_poisoned_lock() {
        let (state, shutdown, handle) = spawn_countdown();
        state.start(0, 30).unwrap();
        state.poison();

        sleep(Duration::from_secs(2)).await;
        assert!(!handle.is_finished());

        shutdown.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("countdown task did not stop")
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_sender_is_dropped() {
        let (_state, shutdown, handle) = spawn_countdown();
        drop(shutdown);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("countdown task did not stop")
            .unwrap();
    }
}
