use crate::errors::{LineParseError, ParseErrorKind};
use crate::timestamp::TimeFormat;

/// Separates the start and end timestamps of a range line
pub const RANGE_MARKER: &str = "-->";
const RANGE_JOINER: &str = " --> ";

/// True if the raw line contains the range marker anywhere
pub fn is_range_line(line: &[u8]) -> bool {
    line.windows(RANGE_MARKER.len())
        .any(|window| window == RANGE_MARKER.as_bytes())
}

/// Split a raw line into its content and its terminator (`\r\n`, `\n`, or nothing)
pub(crate) fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    let content_len = if line.ends_with(b"\r\n") {
        line.len() - 2
    } else if line.ends_with(b"\n") {
        line.len() - 1
    } else {
        line.len()
    };
    line.split_at(content_len)
}

/// Rewrite the content of a range line with both timestamps shifted.
///
/// `line` must not carry its terminator. The result is always
/// `start + " --> " + end`, whatever spacing surrounded the marker before.
/// Errors report index 0; callers that know the line position overwrite it.
pub fn shift_range_line(
    line: &str,
    offset_ms: i64,
    format: &TimeFormat,
) -> Result<String, LineParseError> {
    let parts: Vec<&str> = line.split(RANGE_MARKER).collect();
    let [start, end] = parts.as_slice() else {
        return Err(LineParseError::new(
            0,
            line,
            ParseErrorKind::MarkerCount(parts.len()),
        ));
    };

    let start = shift_timestamp(line, start.trim(), offset_ms, format)?;
    let end = shift_timestamp(line, end.trim(), offset_ms, format)?;

    Ok(format!("{}{}{}", start, RANGE_JOINER, end))
}

fn shift_timestamp(
    line: &str,
    text: &str,
    offset_ms: i64,
    format: &TimeFormat,
) -> Result<String, LineParseError> {
    let timestamp = format.parse_timestamp(text).map_err(|err| {
        LineParseError::new(0, line, ParseErrorKind::Timestamp(err)).with_timestamp(text)
    })?;
    Ok(format.format_timestamp(&timestamp.shifted(offset_ms)))
}
