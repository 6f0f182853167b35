use chrono::{NaiveTime, TimeDelta, Timelike};
use std::fmt;

/// Length of the time-of-day cycle that shifted timestamps wrap around
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Fraction digits written when nothing else is known (SRT millisecond field)
pub(crate) const MILLIS_DIGITS: u8 = 3;

/// A subtitle timestamp: a time of day with no calendar date.
///
/// Besides the time itself, a timestamp remembers how many fractional-second
/// digits it was written with, so that `%f` can render it back at the same
/// width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    time: NaiveTime,
    fraction_digits: u8,
}

impl Timestamp {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time,
            fraction_digits: MILLIS_DIGITS,
        }
    }

    /// Build a timestamp from clock fields, `None` if any field is out of range.
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hour, minute, second, milli).map(Self::new)
    }

    pub(crate) fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.fraction_digits = digits.clamp(1, 9);
        self
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }

    /// Milliseconds elapsed since midnight (sub-millisecond part truncated)
    pub fn millis_since_midnight(&self) -> i64 {
        i64::from(self.time.num_seconds_from_midnight()) * 1000
            + i64::from(self.time.nanosecond() / 1_000_000)
    }

    /// Shift by a signed number of milliseconds.
    ///
    /// The result wraps modulo 24 hours in both directions: `23:59:59` plus two
    /// seconds is `00:00:01`, and `00:00:01` minus two seconds is `23:59:59`.
    /// Offsets larger than a day are reduced first, so no input can overflow.
    pub fn shifted(&self, offset_ms: i64) -> Self {
        let delta = TimeDelta::milliseconds(offset_ms.rem_euclid(MILLIS_PER_DAY));
        let (time, _) = self.time.overflowing_add_signed(delta);
        Self { time, ..*self }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::new(NaiveTime::default())
    }
}

impl From<NaiveTime> for Timestamp {
    fn from(time: NaiveTime) -> Self {
        Self::new(time)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.time.hour(),
            self.time.minute(),
            self.time.second(),
            self.time.nanosecond() / 1_000_000
        )
    }
}
