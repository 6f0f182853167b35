use super::observer::LineObserver;
use super::parser::{is_range_line, shift_range_line, split_terminator};
use super::types::{RangeLineChange, ShiftOptions, ShiftSummary};
use crate::errors::{LineParseError, ParseErrorKind, ShiftError, ShiftResult};
use crate::timestamp::TimeFormat;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Shift every range line of `input` by `offset_ms` and write the result to `output`.
///
/// `time_format` defaults to the SubRip layout (`%H:%M:%S,%f`) when `None`.
/// The pattern is checked before any file is opened.
pub fn shift(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    offset_ms: i64,
    time_format: Option<&str>,
) -> ShiftResult<ShiftSummary> {
    let time_format = match time_format {
        Some(pattern) => TimeFormat::new(pattern)?,
        None => TimeFormat::default(),
    };
    let options = ShiftOptions::new(offset_ms).with_time_format(time_format);
    shift_with(input, output, &options, &mut ())
}

/// Same as [`shift`], reporting every rewritten line to `observer`.
///
/// The whole input is transformed before `output` is touched, so a parse
/// failure leaves the output path as it was and `input` may equal `output`.
pub fn shift_with<O>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ShiftOptions,
    observer: &mut O,
) -> ShiftResult<ShiftSummary>
where
    O: LineObserver + ?Sized,
{
    let (input, output) = (input.as_ref(), output.as_ref());
    info!(
        "Shifting {} by {} ms (format {:?})",
        input.display(),
        options.offset_ms,
        options.time_format.pattern()
    );

    let file = File::open(input).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ShiftError::NotFound {
            path: input.to_path_buf(),
        },
        _ => ShiftError::io(Some(input.to_path_buf()), err),
    })?;

    let mut shifted = Vec::new();
    let summary = shift_stream(BufReader::new(file), &mut shifted, options, observer)
        .map_err(|err| attach_path(err, input))?;

    fs::write(output, &shifted).map_err(|err| ShiftError::io(Some(output.to_path_buf()), err))?;

    info!(
        "Wrote {} lines ({} range lines shifted) to {}",
        summary.lines,
        summary.range_lines,
        output.display()
    );
    Ok(summary)
}

/// Core read → classify → transform → write loop over arbitrary byte streams.
///
/// Lines are handled as bytes: anything without the range marker is copied
/// verbatim, terminator included, even if it is not UTF-8. Stops at the first
/// failure; whatever was already written to `writer` stays written.
pub fn shift_stream<R, W, O>(
    mut reader: R,
    mut writer: W,
    options: &ShiftOptions,
    observer: &mut O,
) -> ShiftResult<ShiftSummary>
where
    R: BufRead,
    W: Write,
    O: LineObserver + ?Sized,
{
    let mut summary = ShiftSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let index = summary.lines;
        summary.lines += 1;

        if !is_range_line(&buf) {
            writer.write_all(&buf)?;
            summary.bytes_written += buf.len() as u64;
            continue;
        }

        let (content, terminator) = split_terminator(&buf);
        let before = std::str::from_utf8(content).map_err(|_| {
            LineParseError::new(
                index,
                String::from_utf8_lossy(content),
                ParseErrorKind::NotUtf8,
            )
        })?;
        let after = shift_range_line(before, options.offset_ms, &options.time_format)
            .map_err(|err| err.at_line(index))?;

        writer.write_all(after.as_bytes())?;
        writer.write_all(terminator)?;
        summary.bytes_written += (after.len() + terminator.len()) as u64;
        summary.range_lines += 1;

        observer.on_range_line(&RangeLineChange {
            index,
            before: before.to_string(),
            after,
        });
    }

    writer.flush()?;
    debug!(
        "Processed {} lines, {} range lines",
        summary.lines, summary.range_lines
    );
    Ok(summary)
}

fn attach_path(err: ShiftError, path: &Path) -> ShiftError {
    match err {
        ShiftError::Io { path: None, source } => ShiftError::io(Some(path.to_path_buf()), source),
        other => other,
    }
}
