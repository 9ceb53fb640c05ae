//! Export service. Snapshots the tally and hands it to every configured report port.

use crate::domain::{DomainError, TallyReport};
use crate::ports::ReportPort;
use crate::usecases::PollService;
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ExportService {
    ports: Vec<Arc<dyn ReportPort>>,
    title: String,
}

impl ExportService {
    /// # Arguments
    /// * `ports` - Report sinks (CSV, JSON, ...); every export writes to all of them
    /// * `title` - Poll title stored in each report
    pub fn new(ports: Vec<Arc<dyn ReportPort>>, title: impl Into<String>) -> Self {
        Self {
            ports,
            title: title.into(),
        }
    }

    pub fn formats(&self) -> Vec<&'static str> {
        self.ports.iter().map(|p| p.format()).collect()
    }

    /// Writes the current tally through every port. A failing port is logged and skipped;
    /// the call only fails when no port succeeded.
    pub async fn export(&self, poll: &PollService) -> Result<Vec<PathBuf>, DomainError> {
        let report = TallyReport::build(poll.store(), &self.title, Local::now());
        let mut written = Vec::with_capacity(self.ports.len());
        let mut last_err = None;

        for port in &self.ports {
            match port.write_report(&report).await {
                Ok(path) => {
                    info!(format = port.format(), path = %path.display(), "tally exported");
                    written.push(path);
                }
                Err(e) => {
                    warn!(format = port.format(), error = %e, "tally export failed");
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            Some(e) if written.is_empty() => Err(e),
            _ => Ok(written),
        }
    }
}
