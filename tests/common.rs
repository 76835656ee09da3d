#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimeclock::config::Config;
use rtimeclock::models::employee::Employee;
use rtimeclock::models::raw_row::RawRow;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Create a file with `contents` inside the system temp dir, replacing any
/// leftover from a previous run.
pub fn temp_file(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimeclock_{}", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).expect("write temp file");
    p
}

/// Path inside the temp dir guaranteed not to exist.
pub fn temp_out(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimeclock_{}", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn roster() -> Vec<Employee> {
    vec![
        Employee::new("E1", "Jane", "Doe"),
        Employee::new("E2", "John", "Smith"),
        Employee::new("E3", "Mary", "Ann Lee"),
    ]
}

pub const ROSTER_CSV: &str = "id,first_name,last_name
E1,Jane,Doe
E2,John,Smith
E3,Mary,Ann Lee
";

pub fn config_with_ignored(names: &[&str]) -> Config {
    Config {
        ignore_list: names.iter().map(|n| n.to_string()).collect(),
        ..Config::default()
    }
}

pub fn modern_row(
    employee: &str,
    date: &str,
    time_in: &str,
    time_out: &str,
    location: &str,
) -> RawRow {
    RawRow::from_pairs([
        ("Employee", employee),
        ("Date", date),
        ("Time In", time_in),
        ("Time Out", time_out),
        ("Job Title", "Cashier"),
        ("Location", location),
    ])
}

pub fn legacy_row(employee: &str, in_date: &str, out_date: &str) -> RawRow {
    RawRow::from_pairs([
        ("Employee", employee),
        ("In Date", in_date),
        ("Out Date", out_date),
    ])
}
