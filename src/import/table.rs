use crate::errors::AppResult;
use crate::models::raw_row::{RawRow, RawTable, normalize_header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse a CSV timeclock export. Headers are normalized once here; short
/// records are accepted and simply lack the trailing columns.
pub fn read_table<R: Read>(reader: R) -> AppResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(RawRow::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.as_str(), v.to_string())),
        ));
    }

    Ok(RawTable::new(headers, rows))
}

pub fn read_table_file(path: &Path) -> AppResult<RawTable> {
    let file = File::open(path)?;
    read_table(file)
}
