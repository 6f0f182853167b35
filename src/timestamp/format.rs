use super::types::{Timestamp, MILLIS_DIGITS};
use crate::errors::{TimeFormatError, TimestampParseError};
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Canonical SubRip layout: hours, minutes, seconds, comma, fraction
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S,%f";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Literal(String),
    Hour24,
    Hour12,
    AmPm,
    Minute,
    Second,
    /// Fraction of a second; `Some(n)` pins the width to exactly `n` digits
    Fraction(Option<u8>),
}

/// A compiled strftime/strptime-style time-of-day pattern.
///
/// Supported directives: `%H`, `%I`, `%p`, `%M`, `%S`, `%f`, `%3f`, `%6f`,
/// `%9f` and `%%`. Everything else is a literal that must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pattern: String,
    items: Vec<Item>,
}

#[derive(Default)]
struct Fields {
    hour24: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: u32,
    second: u32,
    nanos: u32,
    fraction_digits: Option<u8>,
}

impl TimeFormat {
    pub fn new(pattern: &str) -> Result<Self, TimeFormatError> {
        Ok(Self {
            pattern: pattern.to_string(),
            items: compile(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse `text` as a timestamp. The whole text must be consumed.
    pub fn parse_timestamp(&self, text: &str) -> Result<Timestamp, TimestampParseError> {
        let mut fields = Fields::default();
        let mut rest = text;

        for item in &self.items {
            rest = match item {
                Item::Literal(literal) => rest.strip_prefix(literal.as_str()).ok_or_else(|| {
                    TimestampParseError::new(format!("expected {:?} at {:?}", literal, rest))
                })?,
                Item::Hour24 => {
                    let (value, r) = take_field(rest, "hour", 23)?;
                    fields.hour24 = Some(value);
                    r
                }
                Item::Hour12 => {
                    let (value, r) = take_field(rest, "hour", 12)?;
                    if value == 0 {
                        return Err(TimestampParseError::new("12-hour clock hour must be 1-12"));
                    }
                    fields.hour12 = Some(value);
                    r
                }
                Item::Minute => {
                    let (value, r) = take_field(rest, "minute", 59)?;
                    fields.minute = value;
                    r
                }
                Item::Second => {
                    let (value, r) = take_field(rest, "second", 59)?;
                    fields.second = value;
                    r
                }
                Item::AmPm => {
                    let (pm, r) = take_am_pm(rest)?;
                    fields.pm = Some(pm);
                    r
                }
                Item::Fraction(width) => {
                    let (min, max) = match width {
                        Some(w) => (*w as usize, *w as usize),
                        None => (1, 9),
                    };
                    let (digits, r) = take_digits(rest, min, max, "fraction")?;
                    let value: u32 = digits.parse().map_err(|_| {
                        TimestampParseError::new(format!("invalid fraction {:?}", digits))
                    })?;
                    fields.nanos = value * 10u32.pow(9 - digits.len() as u32);
                    fields.fraction_digits = Some(digits.len() as u8);
                    r
                }
            };
        }

        if !rest.is_empty() {
            return Err(TimestampParseError::new(format!(
                "unconverted data remains: {:?}",
                rest
            )));
        }

        fields.into_timestamp()
    }

    /// Render `timestamp` with this pattern. No date component is ever written.
    pub fn format_timestamp(&self, timestamp: &Timestamp) -> String {
        let time = timestamp.time();
        let mut out = String::with_capacity(self.pattern.len() + 8);

        for item in &self.items {
            match item {
                Item::Literal(literal) => out.push_str(literal),
                Item::Hour24 => out.push_str(&format!("{:02}", time.hour())),
                Item::Hour12 => out.push_str(&format!("{:02}", time.hour12().1)),
                Item::AmPm => out.push_str(if time.hour12().0 { "PM" } else { "AM" }),
                Item::Minute => out.push_str(&format!("{:02}", time.minute())),
                Item::Second => out.push_str(&format!("{:02}", time.second())),
                Item::Fraction(width) => {
                    let digits = width
                        .unwrap_or_else(|| timestamp.fraction_digits().max(MILLIS_DIGITS));
                    // leap-second nanos never come out of parsing, but NaiveTime allows them
                    let nanos = time.nanosecond() % 1_000_000_000;
                    let value = nanos / 10u32.pow(9 - u32::from(digits));
                    out.push_str(&format!("{:0width$}", value, width = digits as usize));
                }
            }
        }

        out
    }
}

impl Fields {
    fn into_timestamp(self) -> Result<Timestamp, TimestampParseError> {
        // strptime semantics: %I without %p reads as AM, and %p is ignored with %H
        let hour = match (self.hour12, self.hour24) {
            (Some(h12), _) => h12 % 12 + if self.pm == Some(true) { 12 } else { 0 },
            (None, Some(h24)) => h24,
            (None, None) => 0,
        };

        let time = NaiveTime::from_hms_nano_opt(hour, self.minute, self.second, self.nanos)
            .ok_or_else(|| TimestampParseError::new("time of day out of range"))?;

        let timestamp = Timestamp::new(time);
        Ok(match self.fraction_digits {
            Some(digits) => timestamp.with_fraction_digits(digits),
            None => timestamp,
        })
    }
}

fn compile(pattern: &str) -> Result<Vec<Item>, TimeFormatError> {
    if pattern.is_empty() {
        return Err(TimeFormatError::Empty);
    }

    let mut items = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }

        let directive = chars.next().ok_or(TimeFormatError::DanglingPercent)?;
        let item = match directive {
            '%' => {
                literal.push('%');
                continue;
            }
            'H' => Item::Hour24,
            'I' => Item::Hour12,
            'p' => Item::AmPm,
            'M' => Item::Minute,
            'S' => Item::Second,
            'f' => Item::Fraction(None),
            '3' | '6' | '9' => match chars.next() {
                Some('f') => Item::Fraction(Some(directive as u8 - b'0')),
                Some(other) => {
                    return Err(TimeFormatError::UnknownDirective(format!(
                        "{}{}",
                        directive, other
                    )))
                }
                None => return Err(TimeFormatError::UnknownDirective(directive.to_string())),
            },
            other => return Err(TimeFormatError::UnknownDirective(other.to_string())),
        };

        if !literal.is_empty() {
            items.push(Item::Literal(std::mem::take(&mut literal)));
        }
        items.push(item);
    }

    if !literal.is_empty() {
        items.push(Item::Literal(literal));
    }

    Ok(items)
}

/// Split off between `min` and `max` leading ASCII digits
fn take_digits<'a>(
    s: &'a str,
    min: usize,
    max: usize,
    field: &str,
) -> Result<(&'a str, &'a str), TimestampParseError> {
    let len = s.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if len < min {
        return Err(TimestampParseError::new(format!(
            "expected {} digits at {:?}",
            field, s
        )));
    }
    Ok(s.split_at(len))
}

/// One- or two-digit clock field with an inclusive upper bound
fn take_field<'a>(
    s: &'a str,
    field: &str,
    max_value: u32,
) -> Result<(u32, &'a str), TimestampParseError> {
    let (digits, rest) = take_digits(s, 1, 2, field)?;
    let value: u32 = digits
        .parse()
        .map_err(|_| TimestampParseError::new(format!("invalid {} {:?}", field, digits)))?;
    if value > max_value {
        return Err(TimestampParseError::new(format!(
            "{} {} out of range (0-{})",
            field, value, max_value
        )));
    }
    Ok((value, rest))
}

fn take_am_pm(s: &str) -> Result<(bool, &str), TimestampParseError> {
    let marker = s.get(..2).unwrap_or(s);
    if marker.eq_ignore_ascii_case("AM") {
        Ok((false, &s[2..]))
    } else if marker.eq_ignore_ascii_case("PM") {
        Ok((true, &s[2..]))
    } else {
        Err(TimestampParseError::new(format!(
            "expected AM or PM at {:?}",
            s
        )))
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
            items: vec![
                Item::Hour24,
                Item::Literal(":".to_string()),
                Item::Minute,
                Item::Literal(":".to_string()),
                Item::Second,
                Item::Literal(",".to_string()),
                Item::Fraction(None),
            ],
        }
    }
}

impl FromStr for TimeFormat {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
