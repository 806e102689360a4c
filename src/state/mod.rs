//! State management module
//!
//! This module owns the shared timer and publishes its snapshots.

pub mod app_state;
pub mod error;

// Re-export main types
pub use app_state::AppState;
pub use error::StateError;
