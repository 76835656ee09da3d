use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Load the roster, choosing the parser from the file extension
/// (`.json`, anything else is read as CSV with `id,first_name,last_name`).
pub fn load_roster(path: &Path) -> AppResult<Vec<Employee>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let roster = if is_json {
        read_roster_json(&fs::read_to_string(path)?)?
    } else {
        read_roster_csv(File::open(path)?)?
    };

    tracing::debug!(path = %path.display(), employees = roster.len(), "roster loaded");
    Ok(roster)
}

pub fn read_roster_csv<R: Read>(reader: R) -> AppResult<Vec<Employee>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut roster = Vec::new();
    for record in rdr.deserialize() {
        let employee: Employee = record?;
        roster.push(employee);
    }

    check_roster(roster)
}

pub fn read_roster_json(content: &str) -> AppResult<Vec<Employee>> {
    let roster: Vec<Employee> = serde_json::from_str(content)?;
    check_roster(roster)
}

fn check_roster(roster: Vec<Employee>) -> AppResult<Vec<Employee>> {
    if let Some(pos) = roster.iter().position(|e| e.id.trim().is_empty()) {
        return Err(AppError::Roster(format!(
            "employee at position {} has an empty id",
            pos + 1
        )));
    }
    Ok(roster)
}
