//! Property-based tests for the line shifter.

use proptest::prelude::*;
use srtshift::{shift_stream, ShiftOptions, TimeFormat, Timestamp};

const DAY_MS: i64 = 86_400_000;

fn run(input: &[u8], offset_ms: i64) -> Vec<u8> {
    let mut out = Vec::new();
    shift_stream(input, &mut out, &ShiftOptions::new(offset_ms), &mut ()).unwrap();
    out
}

fn render(ms: i64) -> String {
    let ms = ms as u32;
    let ts = Timestamp::from_hms_milli(ms / 3_600_000, ms / 60_000 % 60, ms / 1000 % 60, ms % 1000)
        .unwrap();
    TimeFormat::default().format_timestamp(&ts)
}

/// Caption text that never contains the range marker
fn caption() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?'<>/-]{0,40}".prop_filter("no marker", |s| !s.contains("-->"))
}

fn range_line() -> impl Strategy<Value = (i64, i64)> {
    (0..DAY_MS, 0..DAY_MS)
}

proptest! {
    #[test]
    fn line_count_is_preserved(
        captions in prop::collection::vec(caption(), 0..20),
        ranges in prop::collection::vec(range_line(), 0..20),
        offset in -DAY_MS * 2..DAY_MS * 2,
    ) {
        let mut input = String::new();
        for (i, text) in captions.iter().enumerate() {
            input.push_str(text);
            input.push('\n');
            if let Some((start, end)) = ranges.get(i) {
                input.push_str(&format!("{} --> {}\n", render(*start), render(*end)));
            }
        }

        let out = run(input.as_bytes(), offset);
        let out = String::from_utf8(out).unwrap();
        prop_assert_eq!(out.lines().count(), input.lines().count());
    }

    #[test]
    fn passthrough_lines_are_identical(
        captions in prop::collection::vec(caption(), 1..20),
        offset in any::<i64>(),
    ) {
        let input = captions.join("\n");
        let out = run(input.as_bytes(), offset);
        prop_assert_eq!(out, input.into_bytes());
    }

    #[test]
    fn shifting_back_restores_the_line(
        start in 0..DAY_MS,
        length in 0..60_000i64,
        offset in -DAY_MS..DAY_MS,
    ) {
        let end = start + length;
        let shifted_start = start + offset;
        let shifted_end = end + offset;
        prop_assume!(end < DAY_MS);
        prop_assume!(shifted_start >= 0 && shifted_end < DAY_MS);

        let line = format!("{} --> {}\n", render(start), render(end));
        let forward = run(line.as_bytes(), offset);
        let back = run(&forward, -offset);
        prop_assert_eq!(back, line.into_bytes());
    }

    #[test]
    fn shift_is_modulo_one_day(ms in 0..DAY_MS, offset in any::<i64>()) {
        let line = format!("{} --> {}\n", render(ms), render(ms));
        let expected = render((ms + offset.rem_euclid(DAY_MS)) % DAY_MS);
        let out = String::from_utf8(run(line.as_bytes(), offset)).unwrap();
        prop_assert_eq!(out, format!("{} --> {}\n", expected, expected));
    }
}
