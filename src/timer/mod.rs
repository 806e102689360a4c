//! Phase timer module
//!
//! This module contains the work/break state machine, its read model and
//! the notification contract it calls at every phase transition.

pub mod error;
pub mod notifier;
pub mod phase_timer;
pub mod snapshot;

// Re-export main types
pub use error::TimerError;
pub use notifier::{Notifier, Transition};
pub use phase_timer::{format_mm_ss, PhaseDurations, PhaseTimer, TimerState};
pub use snapshot::TimerSnapshot;
