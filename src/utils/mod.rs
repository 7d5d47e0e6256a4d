//! Utility functions

pub mod time;
pub mod validation;

pub use time::{day_range_millis, seconds_to_millis};
pub use validation::handle_charset;
