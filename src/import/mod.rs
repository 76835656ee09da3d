//! Readers for the engine's inputs: timeclock tables and the roster.

mod roster;
mod table;

pub use roster::{load_roster, read_roster_csv, read_roster_json};
pub use table::{read_table, read_table_file};
