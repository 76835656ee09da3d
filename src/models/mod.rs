pub mod diagnostic;
pub mod employee;
pub mod raw_row;
pub mod schedule;
pub mod time_entry;
