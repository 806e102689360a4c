//! Work/break phase timer state machine
//!
//! The timer has no clock of its own. The host calls [`PhaseTimer::tick`]
//! once per elapsed second while the phase is active and observes
//! [`PhaseTimer::phase`] to decide when to start or stop its tick source.
//!
//! ```text
//! Stopped -> Working <-> OnBreak
//!              |  ^        |  ^
//!              v  |        v  |
//!             Paused      Paused
//! ```

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Notifier, TimerError, Transition};

/// Default work phase length: 20 minutes
pub const DEFAULT_WORK_SECS: u64 = 20 * 60;
/// Default break phase length: 20 seconds
pub const DEFAULT_BREAK_SECS: u64 = 20;

/// Lifecycle state of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    Stopped,
    Working,
    OnBreak,
    Paused,
}

impl TimerState {
    /// Whether ticks should be delivered in this state
    pub fn is_active(self) -> bool {
        matches!(self, TimerState::Working | TimerState::OnBreak)
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerState::Stopped => "stopped",
            TimerState::Working => "working",
            TimerState::OnBreak => "on break",
            TimerState::Paused => "paused",
        };
        f.write_str(name)
    }
}

/// Validated phase lengths in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDurations {
    work_secs: u64,
    break_secs: u64,
}

impl PhaseDurations {
    /// Create phase durations, rejecting zero-length phases
    pub fn new(work_secs: u64, break_secs: u64) -> Result<Self, TimerError> {
        if work_secs == 0 {
            return Err(TimerError::InvalidDuration { phase: "work" });
        }
        if break_secs == 0 {
            return Err(TimerError::InvalidDuration { phase: "break" });
        }
        Ok(Self { work_secs, break_secs })
    }

    pub fn work_secs(&self) -> u64 {
        self.work_secs
    }

    pub fn break_secs(&self) -> u64 {
        self.break_secs
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

/// The phase-cycling timer
pub struct PhaseTimer {
    durations: PhaseDurations,
    phase: TimerState,
    remaining: u64,
    sessions_completed: u64,
    /// Active phase interrupted by the last pause; only set while Paused
    paused_from: Option<TimerState>,
    notifier: Arc<dyn Notifier>,
}

impl PhaseTimer {
    /// Create a stopped timer with a full work phase queued
    pub fn new(durations: PhaseDurations, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            durations,
            phase: TimerState::Stopped,
            remaining: durations.work_secs,
            sessions_completed: 0,
            paused_from: None,
            notifier,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> TimerState {
        self.phase
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn sessions_completed(&self) -> u64 {
        self.sessions_completed
    }

    pub fn paused_from(&self) -> Option<TimerState> {
        self.paused_from
    }

    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    /// Length of the phase `remaining` counts down in
    fn current_duration(&self) -> u64 {
        match self.phase {
            TimerState::OnBreak => self.durations.break_secs,
            TimerState::Paused if self.paused_from == Some(TimerState::OnBreak) => {
                self.durations.break_secs
            }
            _ => self.durations.work_secs,
        }
    }

    /// 0.0 .. 1.0 progress within the current phase.
    ///
    /// Frozen while paused; 0.0 while stopped.
    pub fn progress_fraction(&self) -> f64 {
        if self.phase == TimerState::Stopped {
            return 0.0;
        }
        let total = self.current_duration();
        let elapsed = total.saturating_sub(self.remaining);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Remaining time as `MM:SS`
    pub fn display_time(&self) -> String {
        format_mm_ss(self.remaining)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin working from Stopped, or resume the interrupted phase from Paused
    pub fn start(&mut self) {
        match self.phase {
            TimerState::Stopped => {
                self.phase = TimerState::Working;
                self.remaining = self.durations.work_secs;
                info!("Timer started, working for {}s", self.remaining);
            }
            TimerState::Paused => {
                // paused_from is always set on entry to Paused
                let resumed = self.paused_from.take().unwrap_or(TimerState::Working);
                self.phase = resumed;
                info!("Timer resumed {} with {}s left", resumed, self.remaining);
            }
            TimerState::Working | TimerState::OnBreak => {
                debug!("Start ignored, timer already {}", self.phase);
            }
        }
    }

    /// Suspend the active phase
    pub fn pause(&mut self) -> Result<(), TimerError> {
        if !self.phase.is_active() {
            return Err(TimerError::InvalidTransition {
                from: self.phase,
                command: "pause",
            });
        }
        self.paused_from = Some(self.phase);
        self.phase = TimerState::Paused;
        info!("Timer paused with {}s left", self.remaining);
        Ok(())
    }

    /// Return to Stopped with a full work phase queued; the session count is kept
    pub fn reset(&mut self) {
        self.phase = TimerState::Stopped;
        self.remaining = self.durations.work_secs;
        self.paused_from = None;
        info!("Timer reset ({} sessions completed so far)", self.sessions_completed);
    }

    /// Advance one second. Returns the transition that fired, if any.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.phase.is_active() {
            debug!("Tick ignored while {}", self.phase);
            return None;
        }

        if self.remaining > 1 {
            self.remaining -= 1;
            return None;
        }

        let transition = match self.phase {
            TimerState::Working => {
                self.phase = TimerState::OnBreak;
                self.remaining = self.durations.break_secs;
                Transition::ToBreak
            }
            _ => {
                self.phase = TimerState::Working;
                self.remaining = self.durations.work_secs;
                self.sessions_completed += 1;
                Transition::ToWork
            }
        };

        info!("Phase change {}, {}s on the clock", transition, self.remaining);
        self.notifier.notify(transition);
        Some(transition)
    }
}

impl fmt::Debug for PhaseTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseTimer")
            .field("durations", &self.durations)
            .field("phase", &self.phase)
            .field("remaining", &self.remaining)
            .field("sessions_completed", &self.sessions_completed)
            .field("paused_from", &self.paused_from)
            .finish_non_exhaustive()
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
