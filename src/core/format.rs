//! Table schema detection from the header row.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const MODERN_HEADERS: [&str; 3] = ["date", "time in", "time out"];
pub const LEGACY_HEADERS: [&str; 2] = ["in date", "out date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Separate `date`, `time in`, `time out` columns.
    Modern,
    /// Combined `in date` / `out date` date-time columns.
    Legacy,
}

impl TableFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Modern => "modern",
            TableFormat::Legacy => "legacy",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a table from its (already lower-cased) header names.
/// Modern wins when both header sets are present.
pub fn detect_format<'a, I>(headers: I) -> AppResult<TableFormat>
where
    I: IntoIterator<Item = &'a str>,
{
    let set: BTreeSet<&str> = headers.into_iter().collect();

    if MODERN_HEADERS.iter().all(|h| set.contains(h)) {
        return Ok(TableFormat::Modern);
    }
    if LEGACY_HEADERS.iter().all(|h| set.contains(h)) {
        return Ok(TableFormat::Legacy);
    }

    Err(AppError::FormatUnrecognized {
        expected: format!(
            "modern {{{}}} or legacy {{{}}}",
            MODERN_HEADERS.join(", "),
            LEGACY_HEADERS.join(", ")
        ),
        received: set.into_iter().map(str::to_string).collect(),
    })
}
