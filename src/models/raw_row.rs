//! Typed view over one source record.
//!
//! Column names are trimmed and lower-cased once, when the row is built, so
//! every later lookup is a plain case-insensitive key match.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: BTreeMap<String, String>,
}

pub fn normalize_header(h: &str) -> String {
    h.trim().trim_start_matches('\u{feff}').trim().to_lowercase()
}

impl RawRow {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (normalize_header(k.as_ref()), v.into()))
            .collect();
        Self { fields }
    }

    /// Value for a column, `None` when the column is missing or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(&column.to_lowercase())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First non-blank value among several alternative column names.
    pub fn first_of(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|c| self.get(c))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// A parsed upload: its header set plus the data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new<I, S>(headers: I, rows: Vec<RawRow>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|h| normalize_header(h.as_ref()))
                .collect(),
            rows,
        }
    }

    /// Build a table whose header set is taken from the first row.
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        let headers = rows
            .first()
            .map(|r| r.headers().map(str::to_string).collect())
            .unwrap_or_default();
        Self { headers, rows }
    }
}
