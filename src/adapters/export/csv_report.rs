//! Implements ReportPort as a semicolon-delimited CSV table.
//!
//! Layout mirrors the on-screen grid: one row per participant with `x` in selected
//! columns, followed by the total-votes row.

use crate::domain::{DomainError, TallyReport, TOTAL_ROW_LABEL};
use crate::ports::ReportPort;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct CsvReport {
    out_dir: PathBuf,
}

impl CsvReport {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }
}

/// Render the report as CSV text. Header: `Participant;<day labels>`.
pub fn report_to_csv(report: &TallyReport) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(Vec::new());

    let mut header = Vec::with_capacity(report.day_labels.len() + 1);
    header.push("Participant".to_string());
    header.extend(report.day_labels.iter().cloned());
    wtr.write_record(&header)?;

    for row in &report.rows {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.participant.to_string());
        record.extend(row.cells.iter().map(|on| (if *on { "x" } else { "" }).to_string()));
        wtr.write_record(&record)?;
    }

    let mut totals = Vec::with_capacity(report.totals.len() + 1);
    totals.push(TOTAL_ROW_LABEL.to_string());
    totals.extend(report.totals.iter().map(usize::to_string));
    wtr.write_record(&totals)?;

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

#[async_trait::async_trait]
impl ReportPort for CsvReport {
    fn format(&self) -> &'static str {
        "csv"
    }

    async fn write_report(&self, report: &TallyReport) -> Result<PathBuf, DomainError> {
        let body = report_to_csv(report).map_err(|e| DomainError::Export(e.to_string()))?;
        fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|e| DomainError::Export(format!("create export dir: {}", e)))?;
        let path = self.out_dir.join(format!("{}.csv", report.file_stem()));
        fs::write(&path, body)
            .await
            .map_err(|e| DomainError::Export(format!("write csv: {}", e)))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvailabilityStore, Calendar, EligibleDay, Participant, Roster};
    use chrono::{Local, NaiveDate, TimeZone};

    fn report() -> TallyReport {
        let roster = Roster::new(["Nóri", "Anna"]).unwrap();
        let calendar = Calendar::business_days(
            NaiveDate::from_ymd_opt(2024, 11, 14).unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(),
        )
        .unwrap();
        let mut store = AvailabilityStore::new(roster, calendar);
        let fri = EligibleDay::new(NaiveDate::from_ymd_opt(2024, 11, 15).unwrap());
        store.set(&Participant::from("Nóri"), [fri]).unwrap();
        let at = Local.with_ymd_and_hms(2024, 11, 12, 9, 30, 0).unwrap();
        TallyReport::build(&store, "Poll", at)
    }

    #[test]
    fn test_report_to_csv_layout() {
        let csv = report_to_csv(&report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Participant;2024.11.14 (Cs);2024.11.15 (P);2024.11.18 (H)",
                "Anna;;;",
                "Nóri;;x;",
                "ÖSSZES SZAVAZAT;0;1;0",
            ]
        );
    }

    #[tokio::test]
    async fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let port = CsvReport::new(dir.path().join("exports"));
        let path = port.write_report(&report()).await.unwrap();

        assert_eq!(path.file_name().unwrap(), "tally-20241112-093000.csv");
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Participant;"));
        assert!(written.contains("Nóri;;x;"));
    }
}
