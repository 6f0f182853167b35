mod format;
mod types;

pub use format::{TimeFormat, DEFAULT_TIME_FORMAT};
pub use types::{Timestamp, MILLIS_PER_DAY};
#[cfg(test)]
pub mod unit_test;
