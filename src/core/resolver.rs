//! Maps the free-text employee column of a row onto the roster.

use crate::models::employee::Employee;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a Employee),
    /// Name is on the ignore-list; the row is dropped on purpose.
    Ignored,
    NotFound,
}

pub struct EmployeeResolver<'a> {
    by_name: HashMap<(String, String), &'a Employee>,
    ignore_list: &'a [String],
}

/// Split a display name into `(first, last)`.
///
/// `"Doe, Jane"` is read as last-comma-first; anything else splits on the
/// first whitespace with the remaining words kept together as the last name.
pub fn split_name(field: &str) -> (String, String) {
    let field = field.trim();

    if let Some((last, first)) = field.split_once(',') {
        return (first.trim().to_string(), last.trim().to_string());
    }

    let mut words = field.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let last = words.collect::<Vec<_>>().join(" ");
    (first, last)
}

impl<'a> EmployeeResolver<'a> {
    pub fn new(roster: &'a [Employee], ignore_list: &'a [String]) -> Self {
        let mut by_name = HashMap::with_capacity(roster.len());
        for employee in roster {
            by_name
                .entry((employee.first_name.clone(), employee.last_name.clone()))
                .or_insert(employee);
        }

        Self {
            by_name,
            ignore_list,
        }
    }

    fn is_ignored(&self, raw: &str, first: &str, last: &str) -> bool {
        let normalized = format!("{first} {last}");
        self.ignore_list
            .iter()
            .any(|name| name == raw || *name == normalized)
    }

    /// Exact, case-sensitive match on both first and last name.
    pub fn resolve(&self, field: &str) -> Resolution<'a> {
        let raw = field.trim();
        let (first, last) = split_name(raw);

        if self.is_ignored(raw, &first, &last) {
            return Resolution::Ignored;
        }

        match self.by_name.get(&(first, last)) {
            Some(employee) => Resolution::Found(*employee),
            None => Resolution::NotFound,
        }
    }
}
