//! Timer error types

use thiserror::Error;

use super::TimerState;

/// Errors produced by the phase timer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A command was issued in a state that does not accept it
    #[error("cannot {command} while {from}")]
    InvalidTransition {
        from: TimerState,
        command: &'static str,
    },

    /// A phase duration of zero seconds was configured
    #[error("{phase} duration must be greater than zero seconds")]
    InvalidDuration { phase: &'static str },
}
