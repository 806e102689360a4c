//! External collaborator module
//!
//! This module contains the notifiers the timer calls at phase transitions.

pub mod notifier;

// Re-export main types
pub use notifier::{play_sound, LogNotifier, SoundNotifier};
