//! Core domain layer. No external I/O dependencies.
//!
//! Calendar, roster, availability store and the aggregator live here.

pub mod calendar;
pub mod entities;
pub mod errors;
pub mod report;
pub mod roster;
pub mod store;
pub mod summary;

pub use calendar::Calendar;
pub use entities::{EligibleDay, Participant, ResponseStatus};
pub use errors::DomainError;
pub use report::{ReportRow, TallyReport, TOTAL_ROW_LABEL};
pub use roster::Roster;
pub use store::{AvailabilitySet, AvailabilityStore};
pub use summary::Summary;
