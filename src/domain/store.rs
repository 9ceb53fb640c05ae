//! Availability store: participant -> selected days. The single source of truth.
//!
//! Writes are full-row replacements and are validated before anything is touched,
//! so a rejected `set` leaves the previous selection authoritative.

use crate::domain::{Calendar, DomainError, EligibleDay, Participant, Roster};
use std::collections::{BTreeSet, HashMap};

/// One participant's selected days, ordered by date.
pub type AvailabilitySet = BTreeSet<EligibleDay>;

#[derive(Debug, Clone)]
pub struct AvailabilityStore {
    roster: Roster,
    calendar: Calendar,
    selections: HashMap<Participant, AvailabilitySet>,
}

impl AvailabilityStore {
    /// New store with every roster member mapped to an empty set.
    pub fn new(roster: Roster, calendar: Calendar) -> Self {
        let mut store = Self {
            roster,
            calendar,
            selections: HashMap::new(),
        };
        store.initialize();
        store
    }

    /// Resets every participant to an empty selection.
    pub fn initialize(&mut self) {
        self.selections = self
            .roster
            .iter()
            .map(|p| (p.clone(), AvailabilitySet::new()))
            .collect();
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn get(&self, participant: &Participant) -> Result<AvailabilitySet, DomainError> {
        self.selection(participant).cloned()
    }

    /// Borrowing variant of [`get`](Self::get).
    pub fn selection(&self, participant: &Participant) -> Result<&AvailabilitySet, DomainError> {
        self.ensure_known(participant)?;
        static EMPTY: AvailabilitySet = AvailabilitySet::new();
        Ok(self.selections.get(participant).unwrap_or(&EMPTY))
    }

    /// Replaces the participant's whole selection with `days`.
    pub fn set<I>(&mut self, participant: &Participant, days: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = EligibleDay>,
    {
        self.ensure_known(participant)?;
        let days: AvailabilitySet = days.into_iter().collect();
        if let Some(bad) = days.iter().find(|d| !self.calendar.contains(d)) {
            return Err(DomainError::InvalidDay(bad.date()));
        }
        self.selections.insert(participant.clone(), days);
        Ok(())
    }

    pub fn contains_day(&self, participant: &Participant, day: &EligibleDay) -> bool {
        self.selections
            .get(participant)
            .is_some_and(|set| set.contains(day))
    }

    /// Number of days picked. Only called for roster members, which always have a row.
    pub(crate) fn selected_count(&self, participant: &Participant) -> usize {
        self.selections.get(participant).map_or(0, AvailabilitySet::len)
    }

    fn ensure_known(&self, participant: &Participant) -> Result<(), DomainError> {
        if self.roster.contains(participant) {
            Ok(())
        } else {
            Err(DomainError::UnknownParticipant(participant.to_string()))
        }
    }
}
