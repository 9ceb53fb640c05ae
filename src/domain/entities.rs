//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here; adapters render these.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A roster member, identified by display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A candidate date. Only days produced by the calendar are accepted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EligibleDay(NaiveDate);

impl EligibleDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn is_business_day(&self) -> bool {
        !matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Short Hungarian weekday name (H, K, Sz, Cs, P; Szo/V on weekends).
    pub fn weekday_abbrev(&self) -> &'static str {
        match self.0.weekday() {
            Weekday::Mon => "H",
            Weekday::Tue => "K",
            Weekday::Wed => "Sz",
            Weekday::Thu => "Cs",
            Weekday::Fri => "P",
            Weekday::Sat => "Szo",
            Weekday::Sun => "V",
        }
    }

    /// Column label, e.g. `2024.11.11 (H)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.0.format("%Y.%m.%d"), self.weekday_abbrev())
    }
}

impl fmt::Display for EligibleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for EligibleDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Whether a participant has picked at least one day. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Pending,
    Responded,
}

impl ResponseStatus {
    pub fn from_selection_len(len: usize) -> Self {
        if len == 0 {
            Self::Pending
        } else {
            Self::Responded
        }
    }

    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}
