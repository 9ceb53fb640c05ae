//! Poll service. The per-session facade the UI talks to.
//!
//! Owns exactly one `AvailabilityStore`, built from static configuration. Separate UI
//! sessions build separate services; nothing is shared between them.

use crate::domain::{
    AvailabilitySet, AvailabilityStore, Calendar, DomainError, EligibleDay, Participant, Roster,
    Summary,
};
use crate::usecases::edit_session::{CommitMode, GridEdit, ParticipantEdit};
use chrono::NaiveDate;
use tracing::{debug, info};

pub struct PollService {
    store: AvailabilityStore,
}

impl PollService {
    /// Builds calendar, roster and an empty store.
    pub fn new<I, S>(start: NaiveDate, end: NaiveDate, names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let calendar = Calendar::business_days(start, end)?;
        let roster = Roster::new(names)?;
        info!(
            %start,
            %end,
            days = calendar.len(),
            participants = roster.len(),
            "poll session created"
        );
        Ok(Self::with_store(AvailabilityStore::new(roster, calendar)))
    }

    pub fn with_store(store: AvailabilityStore) -> Self {
        Self { store }
    }

    pub fn list_eligible_days(&self) -> &[EligibleDay] {
        self.store.calendar().days()
    }

    pub fn list_participants(&self) -> &[Participant] {
        self.store.roster().participants()
    }

    pub fn find_participant(&self, name: &str) -> Result<Participant, DomainError> {
        self.store
            .roster()
            .find(name)
            .cloned()
            .ok_or_else(|| DomainError::UnknownParticipant(name.to_string()))
    }

    pub fn get_availability(&self, participant: &Participant) -> Result<AvailabilitySet, DomainError> {
        debug!(participant = %participant, "get availability");
        self.store.get(participant)
    }

    pub fn set_availability<I>(&mut self, participant: &Participant, days: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = EligibleDay>,
    {
        self.store.set(participant, days)?;
        info!(participant = %participant, "availability set");
        Ok(())
    }

    /// Fresh aggregate over the current store.
    pub fn get_summary(&self) -> Summary {
        Summary::compute(&self.store)
    }

    pub fn open_grid(&self) -> GridEdit {
        GridEdit::open(&self.store)
    }

    pub fn commit_grid(&mut self, grid: &mut GridEdit) -> Result<Vec<Participant>, DomainError> {
        grid.commit(&mut self.store)
    }

    pub fn open_participant(
        &self,
        participant: &Participant,
        mode: CommitMode,
    ) -> Result<ParticipantEdit, DomainError> {
        ParticipantEdit::open(&self.store, participant, mode)
    }

    pub fn toggle_day(&mut self, edit: &mut ParticipantEdit, day: EligibleDay) -> Result<bool, DomainError> {
        edit.toggle(&mut self.store, day)
    }

    pub fn replace_draft(&mut self, edit: &mut ParticipantEdit, days: Vec<EligibleDay>) -> Result<(), DomainError> {
        edit.replace_draft(&mut self.store, days)
    }

    pub fn confirm(&mut self, edit: &mut ParticipantEdit) -> Result<(), DomainError> {
        edit.confirm(&mut self.store)
    }

    pub fn store(&self) -> &AvailabilityStore {
        &self.store
    }
}
