//! Countdown Timer - A single countdown timer served over HTTP
//! 
//! One shared timer can be started, stopped, paused and reset through a JSON
//! API while a background task counts it down once per elapsed second.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use state::AppState;
pub use api::create_router;
pub use tasks::countdown_task;
pub use utils::signals::shutdown_signal;
