use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rtimeclock::export::load_report;
use rtimeclock::models::time_entry::{AnomalyFlag, EntryStatus};
use std::fs;
use std::path::Path;

mod common;
use common::{ROSTER_CSV, rti, temp_file, temp_out};

const MODERN_CSV: &str = "Employee,Date,Time In,Time Out,Job Title,Location
Jane Doe,\"Jul 1, 2024\",6:30 AM,2:00 PM,Cashier,Canyon
John Smith,7/6/24,8:00 AM,4:00 AM,Stocker,Polk Plaza
Ghost Person,7/1/24,9:00 AM,5:00 PM,Stocker,Canyon
";

const LEGACY_CSV: &str = "Employee,In Date,Out Date
Jane Doe,7/1/24 6:45 AM,7/1/24 4:00 AM
";

/// Nonexistent config path so every test runs on built-in defaults.
fn no_config(name: &str) -> String {
    temp_out(&format!("{name}.conf"))
}

#[test]
fn test_detect_reports_format() {
    let cfg = no_config("detect");
    let modern = temp_file("detect_modern.csv", MODERN_CSV);
    let legacy = temp_file("detect_legacy.csv", LEGACY_CSV);

    rti()
        .args(["--config", &cfg, "detect", &modern])
        .assert()
        .success()
        .stdout(contains("modern"));

    rti()
        .args(["--config", &cfg, "detect", &legacy])
        .assert()
        .success()
        .stdout(contains("legacy"));
}

#[test]
fn test_ingest_rejects_unknown_format() {
    let cfg = no_config("unknown_format");
    let input = temp_file("unknown_format.csv", "Employee,Day,Start\nJane Doe,7/1/24,9:00 AM\n");
    let roster = temp_file("unknown_format_roster.csv", ROSTER_CSV);

    rti()
        .args(["--config", &cfg, "ingest", &input, "--roster", &roster])
        .assert()
        .failure()
        .stderr(contains("Unrecognized table format").and(contains("time out")));
}

#[test]
fn test_ingest_writes_json_report() {
    let cfg = no_config("ingest_json");
    let input = temp_file("ingest_json.csv", MODERN_CSV);
    let roster = temp_file("ingest_json_roster.csv", ROSTER_CSV);
    let out = temp_out("ingest_json_out.json");

    rti()
        .args([
            "--config", &cfg, "ingest", &input, "--roster", &roster, "--output", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("1 entries approved"))
        .stdout(contains("1 entries flagged"))
        .stdout(contains("not in roster"));

    let report = load_report(Path::new(&out)).expect("report readable");
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].row_index, 2);

    let approved = &report.entries[0];
    assert_eq!(approved.status, EntryStatus::Approved);
    assert_eq!(approved.duration_minutes, 450);

    let flagged = &report.entries[1];
    assert!(flagged.has_flag(AnomalyFlag::AutoClockOut));
    assert_eq!(
        flagged.suggested_correction_out.map(|t| t.to_string()),
        Some("16:00".to_string())
    );

    let raw = fs::read_to_string(&out).unwrap();
    assert!(raw.contains("\"clock_in\": \"06:30\""));
    assert!(raw.contains("\"date\": \"2024-07-01\""));
    assert!(raw.contains("AUTO_CLOCK_OUT"));
}

#[test]
fn test_ingest_writes_csv_entries() {
    let cfg = no_config("ingest_csv");
    let input = temp_file("ingest_csv.csv", LEGACY_CSV);
    let roster = temp_file("ingest_csv_roster.csv", ROSTER_CSV);
    let out = temp_out("ingest_csv_out.csv");

    rti()
        .args([
            "--config", &cfg, "ingest", &input, "--roster", &roster, "--output", &out,
            "--format", "csv", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("id,employee_id,date,clock_in,clock_out"));
    let row = lines.next().unwrap();
    assert!(row.contains("2024-07-01,06:45,04:00"));
    assert!(row.contains("Flagged"));
    assert!(row.contains("AUTO_CLOCK_OUT"));
    assert!(row.ends_with(",18:00"));
}

#[test]
fn test_ingest_honours_ignore_list_from_config() {
    let cfg = temp_file("ignore.conf", "ignore_list:\n  - Ghost Person\n");
    let input = temp_file("ignore.csv", MODERN_CSV);
    let roster = temp_file("ignore_roster.csv", ROSTER_CSV);

    rti()
        .args(["--config", &cfg, "ingest", &input, "--roster", &roster])
        .assert()
        .success()
        .stdout(contains("ignore-listed"))
        .stdout(contains("not in roster").not());
}

#[test]
fn test_edit_revalidates_entry() {
    let cfg = no_config("edit");
    let input = temp_file(
        "edit.csv",
        "Employee,Date,Time In,Time Out\nJane Doe,7/2/24,7:00 AM,\n",
    );
    let roster = temp_file("edit_roster.csv", ROSTER_CSV);
    let out = temp_out("edit_report.json");

    rti()
        .args([
            "--config", &cfg, "ingest", &input, "--roster", &roster, "--output", &out, "--force",
        ])
        .assert()
        .success();

    let report = load_report(Path::new(&out)).unwrap();
    let entry = &report.entries[0];
    assert!(entry.has_flag(AnomalyFlag::MissingTime));
    let id = entry.id.to_string();

    rti()
        .args(["--config", &cfg, "edit", &out, "--id", &id, "--out", "3:30 PM"])
        .assert()
        .success()
        .stdout(contains("Approved"));

    let report = load_report(Path::new(&out)).unwrap();
    let entry = &report.entries[0];
    assert_eq!(entry.id.to_string(), id);
    assert_eq!(entry.status, EntryStatus::Approved);
    assert!(entry.flags.is_empty());
    assert_eq!(entry.duration_minutes, 510);
}

#[test]
fn test_edit_rejects_bad_input() {
    let cfg = no_config("edit_bad");
    let input = temp_file("edit_bad.csv", MODERN_CSV);
    let roster = temp_file("edit_bad_roster.csv", ROSTER_CSV);
    let out = temp_out("edit_bad_report.json");

    rti()
        .args([
            "--config", &cfg, "ingest", &input, "--roster", &roster, "--output", &out, "--force",
        ])
        .assert()
        .success();

    let id = load_report(Path::new(&out)).unwrap().entries[0].id.to_string();

    rti()
        .args(["--config", &cfg, "edit", &out, "--id", &id, "--in", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rti()
        .args([
            "--config",
            &cfg,
            "edit",
            &out,
            "--id",
            "00000000-0000-0000-0000-000000000000",
            "--in",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("No time entry found"));

    rti()
        .args(["--config", &cfg, "edit", &out, "--id", "not-a-uuid", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("invalid entry id 'not-a-uuid'"))
        .stderr(contains("No time entry found").not());
}

#[test]
fn test_config_check_and_print() {
    let cfg = no_config("check_ok");
    rti()
        .args(["--config", &cfg, "config", "--check", "--print"])
        .assert()
        .success()
        .stdout(contains("Configuration OK"))
        .stdout(contains("Sat-Sun"))
        .stdout(contains("polk"));

    let bad = temp_file(
        "check_bad.conf",
        "correction:\n  location_aliases:\n    - contains: mesa\n      key: mesa\n",
    );
    rti()
        .args(["--config", &bad, "config", "--check"])
        .assert()
        .failure()
        .stdout(contains("unknown schedule key 'mesa'"));
}

#[test]
fn test_malformed_config_is_reported() {
    let roster = temp_file("bad_yaml_roster.csv", ROSTER_CSV);
    let input = temp_file("bad_yaml.csv", MODERN_CSV);

    let broken = temp_file("bad_yaml.conf", "correction: [\n");
    rti()
        .args(["--config", &broken, "ingest", &input, "--roster", &roster])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));

    let bad_time = temp_file("bad_time.conf", "correction:\n  auto_clock_out: \"25:99\"\n");
    rti()
        .args(["--config", &bad_time, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("Configuration error").and(contains("25:99")));
}

#[test]
fn test_init_writes_default_config() {
    let cfg = temp_out("init.conf");

    rti().args(["--config", &cfg, "init"]).assert().success();

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("auto_clock_out: 04:00") || content.contains("auto_clock_out: '04:00'"));
    assert!(content.contains("shift_schedule"));

    rti()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success();
}
