//! Application state errors

use thiserror::Error;

use crate::timer::TimerError;

#[derive(Debug, Error)]
pub enum StateError {
    /// The timer mutex was poisoned by a panicking holder
    #[error("Failed to lock timer state: {0}")]
    Lock(String),

    #[error(transparent)]
    Timer(#[from] TimerError),
}
