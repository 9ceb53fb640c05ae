//! Tally snapshot handed to report adapters. Built from the store, never read back.

use crate::domain::{AvailabilityStore, EligibleDay, Participant, ResponseStatus, Summary};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Label of the count row, as shown above the grid.
pub const TOTAL_ROW_LABEL: &str = "ÖSSZES SZAVAZAT";

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub participant: Participant,
    pub status: ResponseStatus,
    /// Aligned with `TallyReport::days`.
    pub cells: Vec<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub days: Vec<EligibleDay>,
    pub day_labels: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub totals: Vec<usize>,
}

impl TallyReport {
    pub fn build(store: &AvailabilityStore, title: &str, generated_at: DateTime<Local>) -> Self {
        let summary = Summary::compute(store);
        let rows = summary
            .response_status
            .iter()
            .map(|(participant, status)| ReportRow {
                participant: participant.clone(),
                status: *status,
                cells: summary
                    .days
                    .iter()
                    .map(|d| store.contains_day(participant, d))
                    .collect(),
            })
            .collect();
        Self {
            title: title.to_string(),
            generated_at,
            day_labels: summary.days.iter().map(EligibleDay::label).collect(),
            days: summary.days,
            rows,
            totals: summary.per_day_counts,
        }
    }

    /// File stem for exports, e.g. `tally-20241112-093000`.
    pub fn file_stem(&self) -> String {
        format!("tally-{}", self.generated_at.format("%Y%m%d-%H%M%S"))
    }
}
