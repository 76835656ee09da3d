//! Time utilities: the canonical `HH:MM` clock value and the parsers that
//! turn raw timeclock strings ("2:15 PM", "\"6:30 am\"") into it.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

static TWELVE_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2})(?::\d{2})?\s*([ap])\.?m\.?$").expect("valid 12h regex")
});

static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid HH:MM regex"));

/// A wall-clock time with minute precision, always rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Build from literal components, for constants and defaults.
    ///
    /// # Panics
    ///
    /// If `hour > 23` or `minute > 59`. Use [`ClockTime::from_hm`] for
    /// values that come from input.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "clock time out of range");
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Checked constructor; `None` when a component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_canonical_time(s).ok_or_else(|| format!("expected HH:MM, got '{s}'"))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a 12-hour time such as `"2:15 PM"` into a 24-hour `ClockTime`.
///
/// Stray quote characters and surrounding whitespace are ignored. The hour
/// must be 1–12, the minute 00–59 and an AM/PM marker must be present;
/// anything else yields `None` rather than a guess.
pub fn parse_time(raw: &str) -> Option<ClockTime> {
    let cleaned: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let caps = TWELVE_HOUR.captures(cleaned.trim())?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let is_pm = caps[3].eq_ignore_ascii_case("p");
    let hour24 = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    ClockTime::from_hm(hour24, minute)
}

/// Parse an already-canonical 24-hour `HH:MM` value.
pub fn parse_canonical_time(raw: &str) -> Option<ClockTime> {
    let caps = CANONICAL.captures(raw.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    ClockTime::from_hm(hour, minute)
}

/// Accept either the canonical form or a raw 12-hour string (used for edits).
pub fn normalize_time_input(raw: &str) -> Option<ClockTime> {
    parse_canonical_time(raw).or_else(|| parse_time(raw))
}
