//! Eye Break - A 20-20-20 work/break phase timer
//!
//! This library provides the phase-cycling timer state machine and the host
//! pieces around it: a one-second tick source, transition notifiers, a
//! terminal status line and an HTTP control surface.

pub mod config;
pub mod timer;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use timer::{PhaseTimer, TimerState, TimerSnapshot};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
