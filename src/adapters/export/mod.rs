pub mod csv_report;
pub mod json_report;

pub use csv_report::{CsvReport, report_to_csv};
pub use json_report::JsonReport;
