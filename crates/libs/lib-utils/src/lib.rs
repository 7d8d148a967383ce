//! # Utilities Library
//!
//! Shared utility functions for environment variables, time of day and form input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse};
pub use time::{format_time_of_day, seconds_before, time_of_day_from_millis};
pub use validation::parse_amount;
