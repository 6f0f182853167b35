use crate::errors::TimeFormatError;
use crate::timestamp::TimeFormat;
use serde::Serialize;

/// Before/after pair for one rewritten range line, terminators excluded
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RangeLineChange {
    pub index: usize,
    pub before: String,
    pub after: String,
}

/// Counters for one completed shift
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftSummary {
    pub lines: usize,
    pub range_lines: usize,
    pub bytes_written: u64,
}

/// Parameters shared by every line of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftOptions {
    pub offset_ms: i64,
    pub time_format: TimeFormat,
}

impl ShiftOptions {
    pub fn new(offset_ms: i64) -> Self {
        Self {
            offset_ms,
            time_format: TimeFormat::default(),
        }
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Compile `pattern` and use it as the time format
    pub fn with_pattern(self, pattern: &str) -> Result<Self, TimeFormatError> {
        Ok(self.with_time_format(TimeFormat::new(pattern)?))
    }
}
