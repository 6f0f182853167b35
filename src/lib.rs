pub mod timestamp;
pub use timestamp::{TimeFormat, Timestamp, DEFAULT_TIME_FORMAT};

pub mod subtitles;
pub use subtitles::{
    is_range_line, shift, shift_range_line, shift_stream, shift_with, LineObserver, LogObserver,
    RangeLineChange, ShiftOptions, ShiftSummary, RANGE_MARKER,
};

pub mod errors;
pub use errors::{
    LineParseError, ParseErrorKind, ShiftError, ShiftResult, TimeFormatError,
    TimestampParseError,
};
