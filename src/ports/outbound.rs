//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, TallyReport};
use std::path::PathBuf;

/// Report sink. Writes a tally snapshot (CSV, JSON, ...) and returns where it went.
#[async_trait::async_trait]
pub trait ReportPort: Send + Sync {
    /// Short format name used in logs and menus, e.g. "csv".
    fn format(&self) -> &'static str;

    /// Write the report. Each call produces a new file; nothing is read back.
    async fn write_report(&self, report: &TallyReport) -> Result<PathBuf, DomainError>;
}
