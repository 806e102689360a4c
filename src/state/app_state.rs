//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::StateError;
use crate::timer::{Notifier, PhaseDurations, PhaseTimer, TimerSnapshot};

/// Main application state: the single serialized owner of the phase timer
#[derive(Debug)]
pub struct AppState {
    /// The timer; every command and tick goes through this lock
    pub timer: Arc<Mutex<PhaseTimer>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel publishing a snapshot after every mutation
    pub timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create a new AppState holding a stopped timer
    pub fn new(
        port: u16,
        host: String,
        durations: PhaseDurations,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let timer = PhaseTimer::new(durations, notifier);
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerSnapshot::capture(&timer));

        Self {
            timer: Arc::new(Mutex::new(timer)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Apply a mutation to the timer and publish the resulting snapshot.
    ///
    /// `action` is recorded as the last user action when present.
    fn update_timer<F>(&self, action: Option<&str>, updater: F) -> Result<TimerSnapshot, StateError>
    where
        F: FnOnce(&mut PhaseTimer) -> Result<(), StateError>,
    {
        let mut timer = self.timer.lock()
            .map_err(|e| StateError::Lock(e.to_string()))?;

        updater(&mut *timer)?;
        let snapshot = TimerSnapshot::capture(&timer);
        drop(timer); // Release the lock early

        if let Some(action) = action {
            if let Ok(mut last_action) = self.last_action.lock() {
                *last_action = Some(action.to_string());
            }
            if let Ok(mut last_time) = self.last_action_time.lock() {
                *last_time = Some(Utc::now());
            }
        }

        // Notify snapshot watchers (tick source and display)
        if let Err(e) = self.timer_update_tx.send(snapshot.clone()) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok(snapshot)
    }

    /// Start working, or resume a paused phase
    pub fn start(&self) -> Result<TimerSnapshot, StateError> {
        info!("Start requested");
        self.update_timer(Some("start"), |timer| {
            timer.start();
            Ok(())
        })
    }

    /// Pause the active phase
    pub fn pause(&self) -> Result<TimerSnapshot, StateError> {
        info!("Pause requested");
        self.update_timer(Some("pause"), |timer| Ok(timer.pause()?))
    }

    /// Stop the timer and queue a full work phase
    pub fn reset(&self) -> Result<TimerSnapshot, StateError> {
        info!("Reset requested");
        self.update_timer(Some("reset"), |timer| {
            timer.reset();
            Ok(())
        })
    }

    /// Deliver one elapsed second to the timer
    pub fn tick(&self) -> Result<TimerSnapshot, StateError> {
        let snapshot = self.update_timer(None, |timer| {
            timer.tick();
            Ok(())
        })?;
        debug!("Tick: {} {}", snapshot.phase, snapshot.display_time);
        Ok(snapshot)
    }

    /// Get current timer snapshot
    pub fn snapshot(&self) -> Result<TimerSnapshot, StateError> {
        self.timer.lock()
            .map(|timer| TimerSnapshot::capture(&timer))
            .map_err(|e| StateError::Lock(e.to_string()))
    }

    /// Subscribe to snapshots published after every mutation
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.timer_update_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{TimerError, TimerState, Transition};

    struct Silent;

    impl Notifier for Silent {
        fn notify(&self, _transition: Transition) {}
    }

    fn app_state(work: u64, brk: u64) -> AppState {
        AppState::new(
            8080,
            "127.0.0.1".to_string(),
            PhaseDurations::new(work, brk).unwrap(),
            Arc::new(Silent),
        )
    }

    #[test]
    fn commands_publish_snapshots() {
        let state = app_state(5, 2);
        let mut rx = state.subscribe();
        assert_eq!(rx.borrow_and_update().phase, TimerState::Stopped);

        state.start().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().phase, TimerState::Working);

        state.tick().unwrap();
        assert_eq!(rx.borrow_and_update().remaining_secs, 4);
    }

    #[test]
    fn last_action_skips_ticks() {
        let state = app_state(5, 2);
        assert_eq!(state.get_last_action(), (None, None));

        state.start().unwrap();
        state.tick().unwrap();
        let (action, at) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("start"));
        assert!(at.is_some());
    }

    #[test]
    fn rejected_pause_keeps_state_and_last_action() {
        let state = app_state(5, 2);
        let err = state.pause().unwrap_err();
        assert!(matches!(
            err,
            StateError::Timer(TimerError::InvalidTransition { from: TimerState::Stopped, .. })
        ));
        assert_eq!(state.snapshot().unwrap().phase, TimerState::Stopped);
        assert_eq!(state.get_last_action().0, None);
    }

    #[test]
    fn reset_keeps_sessions() {
        let state = app_state(1, 1);
        state.start().unwrap();
        state.tick().unwrap();
        let snapshot = state.tick().unwrap();
        assert_eq!(snapshot.sessions_completed, 1);

        let snapshot = state.reset().unwrap();
        assert_eq!(snapshot.phase, TimerState::Stopped);
        assert_eq!(snapshot.remaining_secs, 1);
        assert_eq!(snapshot.sessions_completed, 1);
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(5), "5s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3723), "1h 2m 3s");
    }
}
