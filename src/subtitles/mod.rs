mod observer;
mod parser;
mod shifter;
mod types;

pub use observer::{LineObserver, LogObserver};
pub use parser::{is_range_line, shift_range_line, RANGE_MARKER};
pub use shifter::{shift, shift_stream, shift_with};
pub use types::{RangeLineChange, ShiftOptions, ShiftSummary};
