//! Utility functions module
//! 
//! Process-level helpers for the server binary.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
