//! Unified application error type.
//! Only batch-level failures live here: row-level skips are reported as
//! `SkipDiagnostic` data and entry anomalies as `AnomalyFlag`s.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Batch-level ingestion errors
    // ---------------------------
    #[error(
        "Unrecognized table format: expected columns {expected}, received [{}]",
        received.join(", ")
    )]
    FormatUnrecognized {
        expected: String,
        received: Vec<String>,
    },

    #[error("Roster error: {0}")]
    Roster(String),

    // ---------------------------
    // Parsing errors (edit input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No time entry found with id {0}")]
    EntryNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
