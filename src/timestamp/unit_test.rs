use crate::errors::TimeFormatError;
use crate::timestamp::{TimeFormat, Timestamp, DEFAULT_TIME_FORMAT};

fn srt() -> TimeFormat {
    TimeFormat::default()
}

#[test]
fn test_default_format_matches_compiled_pattern() {
    assert_eq!(TimeFormat::new(DEFAULT_TIME_FORMAT).unwrap(), TimeFormat::default());
    assert_eq!(srt().pattern(), "%H:%M:%S,%f");
}

#[test]
fn test_parse_srt_timestamp() {
    let ts = srt().parse_timestamp("01:02:03,456").unwrap();
    assert_eq!(ts, Timestamp::from_hms_milli(1, 2, 3, 456).unwrap());
    assert_eq!(ts.millis_since_midnight(), 3_723_456);
    assert_eq!(ts.fraction_digits(), 3);
}

#[test]
fn test_fraction_is_decimal_not_raw_count() {
    let ts = srt().parse_timestamp("00:00:01,5").unwrap();
    assert_eq!(ts.millis_since_midnight(), 1_500);
    // never fewer than three digits on the way out
    assert_eq!(srt().format_timestamp(&ts), "00:00:01,500");
}

#[test]
fn test_fraction_width_is_preserved() {
    let ts = srt().parse_timestamp("00:00:01,000250").unwrap();
    assert_eq!(ts.fraction_digits(), 6);
    assert_eq!(srt().format_timestamp(&ts.shifted(1)), "00:00:01,001250");
}

#[test]
fn test_fixed_width_fraction() {
    let fmt = TimeFormat::new("%H:%M:%S.%3f").unwrap();
    let ts = fmt.parse_timestamp("00:00:01.250").unwrap();
    assert_eq!(fmt.format_timestamp(&ts), "00:00:01.250");
    assert!(fmt.parse_timestamp("00:00:01.25").is_err());
    assert!(fmt.parse_timestamp("00:00:01.2500").is_err());

    let micro = TimeFormat::new("%H:%M:%S.%6f").unwrap();
    assert_eq!(micro.format_timestamp(&ts), "00:00:01.250000");
}

#[test]
fn test_single_digit_fields_are_accepted() {
    let ts = srt().parse_timestamp("1:2:3,004").unwrap();
    assert_eq!(srt().format_timestamp(&ts), "01:02:03,004");
}

#[test]
fn test_twelve_hour_clock() {
    let fmt = TimeFormat::new("%I:%M:%S %p").unwrap();
    let ts = fmt.parse_timestamp("12:30:00 am").unwrap();
    assert_eq!(ts.millis_since_midnight(), 30 * 60 * 1000);
    assert_eq!(fmt.format_timestamp(&ts), "12:30:00 AM");

    let pm = fmt.parse_timestamp("01:00:00 PM").unwrap();
    assert_eq!(pm.millis_since_midnight(), 13 * 3_600_000);
    assert_eq!(fmt.format_timestamp(&pm.shifted(-3_600_000)), "12:00:00 PM");
}

#[test]
fn test_twelve_hour_without_marker_reads_as_morning() {
    let fmt = TimeFormat::new("%I:%M").unwrap();
    let ts = fmt.parse_timestamp("12:15").unwrap();
    assert_eq!(ts.millis_since_midnight(), 15 * 60 * 1000);
}

#[test]
fn test_literal_percent() {
    let fmt = TimeFormat::new("%%%S").unwrap();
    let ts = fmt.parse_timestamp("%07").unwrap();
    assert_eq!(fmt.format_timestamp(&ts), "%07");
}

#[test]
fn test_parse_rejects_malformed_text() {
    let fmt = srt();
    assert!(fmt.parse_timestamp("bad").is_err());
    assert!(fmt.parse_timestamp("").is_err());
    assert!(fmt.parse_timestamp("24:00:00,000").is_err());
    assert!(fmt.parse_timestamp("00:60:00,000").is_err());
    assert!(fmt.parse_timestamp("00:00:00.000").is_err());
    assert!(fmt.parse_timestamp("00:00:00,").is_err());

    let err = fmt.parse_timestamp("00:00:01,000 extra").unwrap_err();
    assert!(err.message.contains("unconverted data remains"));
}

#[test]
fn test_invalid_patterns() {
    assert_eq!(TimeFormat::new(""), Err(TimeFormatError::Empty));
    assert_eq!(TimeFormat::new("%H:%"), Err(TimeFormatError::DanglingPercent));
    assert_eq!(
        TimeFormat::new("%Y-%m-%d"),
        Err(TimeFormatError::UnknownDirective("Y".to_string()))
    );
    assert_eq!(
        TimeFormat::new("%4f"),
        Err(TimeFormatError::UnknownDirective("4".to_string()))
    );
    assert_eq!(
        TimeFormat::new("%3x"),
        Err(TimeFormatError::UnknownDirective("3x".to_string()))
    );
}

#[test]
fn test_shift_wraps_forward_past_midnight() {
    let ts = srt().parse_timestamp("23:59:59,000").unwrap();
    assert_eq!(srt().format_timestamp(&ts.shifted(2_000)), "00:00:01,000");
}

#[test]
fn test_shift_wraps_backward_below_zero() {
    let ts = srt().parse_timestamp("00:00:01,000").unwrap();
    assert_eq!(srt().format_timestamp(&ts.shifted(-2_000)), "23:59:59,000");
}

#[test]
fn test_shift_by_whole_days_is_identity() {
    let ts = Timestamp::from_hms_milli(12, 0, 0, 0).unwrap();
    assert_eq!(ts.shifted(3 * 86_400_000), ts);
    assert_eq!(ts.shifted(-86_400_000), ts);
}

#[test]
fn test_shift_extreme_offsets_do_not_panic() {
    let ts = Timestamp::default();
    let _ = ts.shifted(i64::MIN);
    let _ = ts.shifted(i64::MAX);
}

#[test]
fn test_display_uses_srt_layout() {
    let ts = Timestamp::from_hms_milli(0, 1, 2, 30).unwrap();
    assert_eq!(ts.to_string(), "00:01:02,030");
}
