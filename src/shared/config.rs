//! Application configuration. Poll range, roster, export location.

use crate::domain::DomainError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// Range used when none is configured: the November 2024 team-building window.
pub const DEFAULT_START_DATE: &str = "2024-11-10";
pub const DEFAULT_END_DATE: &str = "2024-12-10";

pub const DEFAULT_PARTICIPANTS: &[&str] = &[
    "Zsuzsi", "Bogi", "Marci", "Reni", "Nóri", "Brigi", "Szonja", "Anna", "Réka", "Nusi", "Ádám",
    "Zsófi", "Mariann", "Gábor",
];

pub const DEFAULT_TITLE: &str = "Búcsúbuli és Csapatépítő Szavazás";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// First day of the poll (inclusive, `YYYY-MM-DD`). Read from DAYPOLL_START_DATE.
    #[serde(default)]
    pub start_date: Option<String>,

    /// Last day of the poll (inclusive, `YYYY-MM-DD`). Read from DAYPOLL_END_DATE.
    #[serde(default)]
    pub end_date: Option<String>,

    /// Roster names. Comma-separated in DAYPOLL_PARTICIPANTS, a list in a config file.
    #[serde(default)]
    pub participants: Option<Vec<String>>,

    /// Directory for CSV/JSON tally exports. Read from DAYPOLL_EXPORT_DIR.
    #[serde(default)]
    pub export_dir: Option<String>,

    /// Poll title shown under the banner and stored in exports. Read from DAYPOLL_TITLE.
    #[serde(default)]
    pub title: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("DAYPOLL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(
            config::Environment::with_prefix("DAYPOLL")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("participants"),
        );
        c.build()?.try_deserialize()
    }

    /// Returns the configured start date. Defaults to 2024-11-10.
    pub fn start_date_or_default(&self) -> Result<NaiveDate, DomainError> {
        parse_date("start_date", self.start_date.as_deref().unwrap_or(DEFAULT_START_DATE))
    }

    /// Returns the configured end date. Defaults to 2024-12-10.
    pub fn end_date_or_default(&self) -> Result<NaiveDate, DomainError> {
        parse_date("end_date", self.end_date.as_deref().unwrap_or(DEFAULT_END_DATE))
    }

    /// Trimmed roster names, blanks dropped. Falls back to the built-in roster when unset.
    pub fn participants_or_default(&self) -> Vec<String> {
        match &self.participants {
            Some(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_PARTICIPANTS.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn export_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.export_dir.as_deref().unwrap_or("./data"))
    }

    pub fn title_or_default(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }
}

fn parse_date(key: &str, raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::Config(format!("{} '{}': {}", key, raw, e)))
}
