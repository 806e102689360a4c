//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod display;
pub mod tick_source;

// Re-export main functions
pub use display::display_task;
pub use tick_source::tick_source_task;
