use crate::utils::time::{ClockTime, parse_time};
use chrono::{NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

static MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\b")
        .expect("valid month regex")
});

static NUMERIC_MDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b").expect("valid M/D/Y regex")
});

static MONTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*$")
        .expect("valid month token regex")
});

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})(st|nd|rd|th)$").expect("valid ordinal regex"));

const LONG_FORMS: [&str; 3] = ["%B %d %Y", "%d %B %Y", "%Y %B %d"];

/// Parse a raw date: long form with a month name ("Jul 1, 2024",
/// "Monday, July 1st 2024") or numeric `M/D/Y` / `M/D/YY`. Two-digit years
/// are read as 20YY in both families.
pub fn parse_date_string(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if MONTH_NAME.is_match(raw) {
        return parse_long_form(raw);
    }

    let caps = NUMERIC_MDY.captures(raw)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if caps[3].len() == 2 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_long_form(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.replace([',', '.'], " ");
    let mut tokens: Vec<String> = cleaned.split_whitespace().map(str::to_string).collect();

    if tokens
        .first()
        .is_some_and(|t| t.parse::<Weekday>().is_ok())
    {
        tokens.remove(0);
    }

    // trailing time-of-day tokens are not part of the date
    tokens.truncate(3);
    for token in tokens.iter_mut() {
        if let Some(caps) = ORDINAL.captures(token) {
            *token = caps[1].to_string();
        } else if let Some(caps) = MONTH_TOKEN.captures(token) {
            // chrono knows "Sep" and "September" but not "Sept"
            *token = caps[1].to_string();
        }
    }

    if !tokens.iter().any(|t| is_digits(t, 4))
        && let Some(last) = tokens.last_mut()
        && is_digits(last, 2)
    {
        last.insert_str(0, "20");
    }
    // chrono's %Y takes any digit count; only a four-digit token is a year
    if !tokens.iter().any(|t| is_digits(t, 4)) {
        return None;
    }

    let candidate = tokens.join(" ");
    LONG_FORMS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&candidate, fmt).ok())
}

fn is_digits(t: &str, n: usize) -> bool {
    t.len() == n && t.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a raw date and render it as canonical `YYYY-MM-DD`.
pub fn extract_and_format_date(raw: &str) -> Option<String> {
    parse_date_string(raw).map(|d| format_date(&d))
}

/// Split a legacy combined field such as `"7/1/24 6:45 AM"` into its date
/// and time parts. Fewer than two whitespace-separated tokens yields nothing.
pub fn parse_legacy_date_time(raw: &str) -> (Option<NaiveDate>, Option<ClockTime>) {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < 2 {
        return (None, None);
    }

    let date = parse_date_string(tokens[0]);
    let time = parse_time(&tokens[1..].join(" "));
    (date, time)
}

pub fn parse_canonical_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accept either the canonical form or any raw form understood at ingestion.
pub fn normalize_date_input(raw: &str) -> Option<NaiveDate> {
    parse_canonical_date(raw).or_else(|| parse_date_string(raw))
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
