use chrono::NaiveDate;
use rtimeclock::utils::date::{
    extract_and_format_date, normalize_date_input, parse_date_string, parse_legacy_date_time,
};
use rtimeclock::utils::time::{ClockTime, normalize_time_input, parse_time};

fn t(raw: &str) -> Option<String> {
    parse_time(raw).map(|c| c.to_string())
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_time_twelve_hour_conversion() {
    assert_eq!(t("12:00 AM").as_deref(), Some("00:00"));
    assert_eq!(t("12:00 PM").as_deref(), Some("12:00"));
    assert_eq!(t("1:05 PM").as_deref(), Some("13:05"));
    assert_eq!(t("12:59 AM").as_deref(), Some("00:59"));
    assert_eq!(t("11:59 PM").as_deref(), Some("23:59"));
    assert_eq!(t("6:30 am").as_deref(), Some("06:30"));
    assert_eq!(t("6:30AM").as_deref(), Some("06:30"));
}

#[test]
fn test_parse_time_every_valid_hour() {
    for h in 1..=12u32 {
        let am = t(&format!("{h}:07 AM")).unwrap();
        let pm = t(&format!("{h}:07 PM")).unwrap();
        let expected_am = if h == 12 { 0 } else { h };
        let expected_pm = if h == 12 { 12 } else { h + 12 };
        assert_eq!(am, format!("{:02}:07", expected_am));
        assert_eq!(pm, format!("{:02}:07", expected_pm));
    }
}

#[test]
fn test_parse_time_tolerates_quotes_and_whitespace() {
    assert_eq!(t("\"2:15 PM\"").as_deref(), Some("14:15"));
    assert_eq!(t("  '9:00 AM'  ").as_deref(), Some("09:00"));
}

#[test]
fn test_parse_time_rejects_malformed() {
    for raw in [
        "", "abc", "9:15", "14:30", "13:00 PM", "0:30 AM", "9:60 AM", "9:5 AM", "9:15 XM",
        "9 AM", "AM",
    ] {
        assert_eq!(parse_time(raw), None, "'{raw}' should not parse");
    }
}

#[test]
fn test_normalize_time_input_accepts_canonical() {
    assert_eq!(normalize_time_input("14:30"), Some(ClockTime::hm(14, 30)));
    assert_eq!(normalize_time_input("2:30 PM"), Some(ClockTime::hm(14, 30)));
    assert_eq!(normalize_time_input("24:00"), None);
}

#[test]
fn test_clock_time_checked_constructor() {
    assert_eq!(ClockTime::from_hm(23, 59), Some(ClockTime::hm(23, 59)));
    assert_eq!(ClockTime::from_hm(24, 0), None);
    assert_eq!(ClockTime::from_hm(9, 60), None);
}

#[test]
#[should_panic(expected = "clock time out of range")]
fn test_clock_time_literal_constructor_panics_out_of_range() {
    let _ = ClockTime::hm(24, 0);
}

#[test]
fn test_parse_date_long_form() {
    assert_eq!(parse_date_string("Jul 1, 2024"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_date_string("July 1, 2024"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_date_string("Monday, July 1st 2024"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_date_string("1 July 2024"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_date_string("Feb 30, 2024"), None);
}

#[test]
fn test_parse_date_long_form_two_digit_year() {
    assert_eq!(parse_date_string("Jul 1, 24"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_date_string("1 July 24"), Some(ymd(2024, 7, 1)));
    assert_eq!(extract_and_format_date("Jul 1, 99").as_deref(), Some("2099-07-01"));
    assert_eq!(parse_date_string("2024 Jul 01"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_date_string("24 Jul 1"), None);
    assert_eq!(parse_date_string("Jul 1, 124"), None);
}

#[test]
fn test_parse_date_long_form_month_variants() {
    assert_eq!(parse_date_string("Sept 3, 2024"), Some(ymd(2024, 9, 3)));
    assert_eq!(parse_date_string("Sep 3, 2024"), Some(ymd(2024, 9, 3)));
    assert_eq!(parse_date_string("September 3rd, 2024"), Some(ymd(2024, 9, 3)));
    assert_eq!(parse_date_string("Tuesday, Sept. 3, 2024"), Some(ymd(2024, 9, 3)));
}

#[test]
fn test_parse_date_numeric() {
    assert_eq!(parse_date_string("7/1/24"), Some(ymd(2024, 7, 1)));
    assert_eq!(parse_date_string("12/31/2023"), Some(ymd(2023, 12, 31)));
    assert_eq!(parse_date_string("2/29/24"), Some(ymd(2024, 2, 29)));
    assert_eq!(parse_date_string("2/30/24"), None);
    assert_eq!(parse_date_string("13/1/24"), None);
    assert_eq!(parse_date_string("not a date"), None);
    assert_eq!(parse_date_string(""), None);
}

#[test]
fn test_extract_and_format_date_is_zero_padded() {
    assert_eq!(extract_and_format_date("7/4/24").as_deref(), Some("2024-07-04"));
    assert_eq!(extract_and_format_date("Jan 5, 2025").as_deref(), Some("2025-01-05"));
    assert_eq!(extract_and_format_date("N/A"), None);
}

#[test]
fn test_normalize_date_input_accepts_canonical() {
    assert_eq!(normalize_date_input("2024-07-06"), Some(ymd(2024, 7, 6)));
    assert_eq!(normalize_date_input("7/6/24"), Some(ymd(2024, 7, 6)));
}

#[test]
fn test_parse_legacy_date_time() {
    assert_eq!(
        parse_legacy_date_time("7/1/24 6:45 AM"),
        (Some(ymd(2024, 7, 1)), Some(ClockTime::hm(6, 45)))
    );
    assert_eq!(
        parse_legacy_date_time("  7/1/24   4:00   AM "),
        (Some(ymd(2024, 7, 1)), Some(ClockTime::hm(4, 0)))
    );
    assert_eq!(
        parse_legacy_date_time("7/1/24 6:45AM"),
        (Some(ymd(2024, 7, 1)), Some(ClockTime::hm(6, 45)))
    );
    assert_eq!(parse_legacy_date_time("7/1/24"), (None, None));
    assert_eq!(parse_legacy_date_time(""), (None, None));
    assert_eq!(
        parse_legacy_date_time("garbage 6:45 AM"),
        (None, Some(ClockTime::hm(6, 45)))
    );
}
