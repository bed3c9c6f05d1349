use chrono::{TimeZone, Utc};

use crate::payload::SessionRecord;

use super::{filter_by_timeframe, Timeframe};

fn record(year: i32, month: u32, day: u32) -> SessionRecord {
    SessionRecord {
        study_date: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        study_time: 30.0,
        actual_study_time: 25.0,
        rest_time: 5.0,
    }
}

#[test]
fn parses_all_five_codes() {
    assert_eq!(Timeframe::parse("1D"), Some(Timeframe::OneDay));
    assert_eq!(Timeframe::parse("1W"), Some(Timeframe::OneWeek));
    assert_eq!(Timeframe::parse("1M"), Some(Timeframe::OneMonth));
    assert_eq!(Timeframe::parse("1Y"), Some(Timeframe::OneYear));
    assert_eq!(Timeframe::parse("AT"), Some(Timeframe::AllTime));
}

#[test]
fn rejects_unrecognized_codes() {
    assert_eq!(Timeframe::parse("2W"), None);
    assert_eq!(Timeframe::parse("at"), None);
    assert_eq!(Timeframe::parse(""), None);
}

#[test]
fn code_round_trips() {
    for code in ["1D", "1W", "1M", "1Y", "AT"] {
        let timeframe = Timeframe::parse(code).expect("code should parse");
        assert_eq!(timeframe.code(), code);
    }
}

#[test]
fn all_time_keeps_every_record() {
    let records = vec![record(2020, 1, 1), record(2024, 6, 1), record(2022, 3, 10)];
    let filtered = filter_by_timeframe(&records, Timeframe::AllTime);
    assert_eq!(filtered, records);
}

#[test]
fn empty_set_short_circuits_for_every_timeframe() {
    for timeframe in [
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::OneYear,
        Timeframe::AllTime,
    ] {
        assert!(filter_by_timeframe(&[], timeframe).is_empty());
    }
}

#[test]
fn one_day_cutoff_is_anchored_to_newest_record_and_inclusive() {
    let records = vec![
        record(2024, 6, 8),  // one day before newest, exactly on the cutoff
        record(2024, 6, 7),  // outside
        record(2024, 6, 9),  // newest
    ];

    let filtered = filter_by_timeframe(&records, Timeframe::OneDay);
    assert_eq!(filtered, vec![record(2024, 6, 8), record(2024, 6, 9)]);
}

#[test]
fn one_week_window_spans_seven_days() {
    let records = vec![
        record(2024, 6, 1),  // 8 days before newest, outside
        record(2024, 6, 2),  // exactly 7 days, on the cutoff
        record(2024, 6, 9),
    ];

    let filtered = filter_by_timeframe(&records, Timeframe::OneWeek);
    assert_eq!(filtered, vec![record(2024, 6, 2), record(2024, 6, 9)]);
}

#[test]
fn one_month_shift_respects_calendar_month_length() {
    // Newest is March 31; one calendar month back clamps to February 29
    // (2024 is a leap year), so a Feb 28 record falls outside the window.
    let records = vec![
        record(2024, 2, 28),
        record(2024, 2, 29),
        record(2024, 3, 31),
    ];

    let filtered = filter_by_timeframe(&records, Timeframe::OneMonth);
    assert_eq!(filtered, vec![record(2024, 2, 29), record(2024, 3, 31)]);
}

#[test]
fn one_year_shift_goes_back_a_calendar_year() {
    let records = vec![
        record(2023, 6, 8),  // one day short of a full year back
        record(2023, 6, 9),  // exactly one year, on the cutoff
        record(2024, 6, 9),
    ];

    let filtered = filter_by_timeframe(&records, Timeframe::OneYear);
    assert_eq!(filtered, vec![record(2023, 6, 9), record(2024, 6, 9)]);
}

#[test]
fn preserves_input_order_even_when_dates_are_unsorted() {
    let records = vec![record(2024, 6, 9), record(2024, 6, 3), record(2024, 6, 7)];
    let filtered = filter_by_timeframe(&records, Timeframe::OneWeek);
    assert_eq!(filtered, records);
}
