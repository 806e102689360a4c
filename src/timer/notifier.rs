//! Phase transition notification contract

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a phase flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    ToBreak,
    ToWork,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::ToBreak => write!(f, "to break"),
            Transition::ToWork => write!(f, "to work"),
        }
    }
}

/// Collaborator called synchronously by the timer at every phase flip.
///
/// Implementations must not block and must swallow their own failures:
/// nothing returned here can reach timer state.
pub trait Notifier: Send + Sync {
    fn notify(&self, transition: Transition);
}
