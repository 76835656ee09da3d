//! ANSI color helper utilities for terminal output.

use crate::models::time_entry::EntryStatus;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Approved → green, Flagged → yellow, Pending → reset
pub fn color_for_status(status: EntryStatus) -> &'static str {
    match status {
        EntryStatus::Approved => GREEN,
        EntryStatus::Flagged => YELLOW,
        EntryStatus::Pending => RESET,
    }
}
