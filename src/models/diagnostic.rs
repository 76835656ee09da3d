use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a source row did not produce a `TimeEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// Listed in the configured ignore-list: intentional, not an error.
    EmployeeIgnored { name: String },
    /// No roster record matches the employee field.
    EmployeeNotFound { name: String },
    /// Date, clock-in and clock-out all failed to parse.
    IncompleteRow,
}

impl SkipReason {
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::EmployeeIgnored { .. } => "EmployeeIgnored",
            SkipReason::EmployeeNotFound { .. } => "EmployeeNotFound",
            SkipReason::IncompleteRow => "IncompleteRow",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmployeeIgnored { name } => {
                write!(f, "employee '{name}' is ignore-listed")
            }
            SkipReason::EmployeeNotFound { name } => {
                write!(f, "employee '{name}' not found in roster")
            }
            SkipReason::IncompleteRow => write!(f, "no usable date or time data"),
        }
    }
}

/// A row-level outcome recorded instead of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipDiagnostic {
    /// Zero-based index of the data row (header excluded).
    pub row_index: usize,
    pub reason: SkipReason,
}
