//! State management module
//! 
//! This module contains the countdown record and the shared state that guards it.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use timer_state::{TickOutcome, TimerSnapshot, TimerState};
