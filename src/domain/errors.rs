//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(String),

    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Day is outside the configured range or falls on a weekend.
    #[error("Invalid day: {0}")]
    InvalidDay(NaiveDate),

    #[error("Grid cell out of range: row {row}, column {col}")]
    CellOutOfRange { row: usize, col: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Export failed: {0}")]
    Export(String),
}
