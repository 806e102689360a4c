//! Read model handed to display collaborators

use serde::{Deserialize, Serialize};

use super::{PhaseTimer, TimerState};

/// Point-in-time view of the timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: TimerState,
    pub remaining_secs: u64,
    /// Remaining time as `MM:SS`
    pub display_time: String,
    /// 0.0 .. 1.0 progress within the current phase
    pub progress: f64,
    pub sessions_completed: u64,
    pub work_secs: u64,
    pub break_secs: u64,
}

impl TimerSnapshot {
    /// Capture the current state of a timer
    pub fn capture(timer: &PhaseTimer) -> Self {
        let durations = timer.durations();
        Self {
            phase: timer.phase(),
            remaining_secs: timer.remaining(),
            display_time: timer.display_time(),
            progress: timer.progress_fraction(),
            sessions_completed: timer.sessions_completed(),
            work_secs: durations.work_secs(),
            break_secs: durations.break_secs(),
        }
    }

    /// Screen time credited per completed session, in minutes
    pub fn minutes_per_session(&self) -> u64 {
        self.work_secs / 60
    }

    /// Total screen time credited to completed sessions, in minutes
    pub fn time_saved_minutes(&self) -> u64 {
        self.sessions_completed * self.minutes_per_session()
    }

    /// Time saved formatted as `{h}h {m}m`
    pub fn time_saved(&self) -> String {
        let minutes = self.time_saved_minutes();
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
