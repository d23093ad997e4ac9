//! Background tasks module
//! 
//! This module contains the task that runs the countdown alongside the HTTP server.

pub mod countdown;

// Re-export main functions
pub use countdown::{countdown_task, WAKE_INTERVAL};
