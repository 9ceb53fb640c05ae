//! Edit sessions: one UI interaction cycle reduced to full-row `set` commits.
//!
//! - `GridEdit`: every participant x every day, commits only the rows that changed
//! - `ParticipantEdit`: one participant, either committing on every toggle (`Live`)
//!   or holding a draft until `confirm` (`Staged`)

use crate::domain::{AvailabilitySet, AvailabilityStore, DomainError, EligibleDay, Participant};
use tracing::{debug, info};

/// Toggle matrix seeded from the store. Rows follow roster order, columns calendar order.
#[derive(Debug, Clone)]
pub struct GridEdit {
    participants: Vec<Participant>,
    days: Vec<EligibleDay>,
    seed: Vec<Vec<bool>>,
    cells: Vec<Vec<bool>>,
}

impl GridEdit {
    pub fn open(store: &AvailabilityStore) -> Self {
        let participants = store.roster().participants().to_vec();
        let days = store.calendar().days().to_vec();
        let seed = Self::snapshot(store, &participants, &days);
        debug!(
            rows = participants.len(),
            cols = days.len(),
            "grid edit opened"
        );
        Self {
            participants,
            days,
            cells: seed.clone(),
            seed,
        }
    }

    fn snapshot(
        store: &AvailabilityStore,
        participants: &[Participant],
        days: &[EligibleDay],
    ) -> Vec<Vec<bool>> {
        participants
            .iter()
            .map(|p| days.iter().map(|d| store.contains_day(p, d)).collect())
            .collect()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn days(&self) -> &[EligibleDay] {
        &self.days
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[bool]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Flips one cell and returns its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, DomainError> {
        let current = self.checked_cell(row, col)?;
        self.cells[row][col] = !current;
        Ok(!current)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: bool) -> Result<(), DomainError> {
        self.checked_cell(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    fn checked_cell(&self, row: usize, col: usize) -> Result<bool, DomainError> {
        self.cell(row, col)
            .ok_or(DomainError::CellOutOfRange { row, col })
    }

    /// Participants whose row differs from the seed.
    pub fn changed_rows(&self) -> Vec<&Participant> {
        self.participants
            .iter()
            .zip(self.cells.iter().zip(&self.seed))
            .filter(|(_, (now, before))| now != before)
            .map(|(p, _)| p)
            .collect()
    }

    pub fn selection_for(&self, row: usize) -> Option<AvailabilitySet> {
        let cells = self.cells.get(row)?;
        Some(
            self.days
                .iter()
                .zip(cells)
                .filter(|(_, on)| **on)
                .map(|(d, _)| *d)
                .collect(),
        )
    }

    /// Commits each changed row with its own `set`. Unchanged rows are never written,
    /// so edits made to them elsewhere since `open` survive.
    pub fn commit(&mut self, store: &mut AvailabilityStore) -> Result<Vec<Participant>, DomainError> {
        let mut committed = Vec::new();
        for row in 0..self.participants.len() {
            if self.cells[row] == self.seed[row] {
                continue;
            }
            let participant = self.participants[row].clone();
            let days = self.selection_for(row).unwrap_or_default();
            store.set(&participant, days.iter().copied())?;
            self.seed[row] = self.cells[row].clone();
            info!(participant = %participant, days = days.len(), "grid row committed");
            committed.push(participant);
        }
        Ok(committed)
    }

    /// Commits an externally built row in one step. Rejects the whole row on any bad day.
    pub fn submit_row(
        &mut self,
        store: &mut AvailabilityStore,
        participant: &Participant,
        days: &[EligibleDay],
    ) -> Result<(), DomainError> {
        store.set(participant, days.iter().copied())?;
        if let Some(row) = self.participants.iter().position(|p| p == participant) {
            let fresh: Vec<bool> = self.days.iter().map(|d| days.contains(d)).collect();
            self.cells[row] = fresh.clone();
            self.seed[row] = fresh;
        }
        info!(participant = %participant, days = days.len(), "grid row submitted");
        Ok(())
    }
}

/// How a single-participant edit reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Every toggle is committed at once.
    Live,
    /// Toggles stay in a draft until `confirm`.
    Staged,
}

#[derive(Debug, Clone)]
pub struct ParticipantEdit {
    participant: Participant,
    mode: CommitMode,
    baseline: AvailabilitySet,
    draft: AvailabilitySet,
}

impl ParticipantEdit {
    pub fn open(
        store: &AvailabilityStore,
        participant: &Participant,
        mode: CommitMode,
    ) -> Result<Self, DomainError> {
        let current = store.get(participant)?;
        debug!(participant = %participant, ?mode, "participant edit opened");
        Ok(Self {
            participant: participant.clone(),
            mode,
            baseline: current.clone(),
            draft: current,
        })
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    pub fn mode(&self) -> CommitMode {
        self.mode
    }

    pub fn draft(&self) -> &AvailabilitySet {
        &self.draft
    }

    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.baseline
    }

    /// Flips `day` in the draft. In `Live` mode the draft is committed immediately and
    /// rolled back if the store rejects it.
    pub fn toggle(
        &mut self,
        store: &mut AvailabilityStore,
        day: EligibleDay,
    ) -> Result<bool, DomainError> {
        if !store.calendar().contains(&day) {
            return Err(DomainError::InvalidDay(day.date()));
        }
        let selected = if self.draft.remove(&day) {
            false
        } else {
            self.draft.insert(day);
            true
        };
        if self.mode == CommitMode::Live {
            if let Err(e) = self.commit(store) {
                if selected {
                    self.draft.remove(&day);
                } else {
                    self.draft.insert(day);
                }
                return Err(e);
            }
        }
        Ok(selected)
    }

    /// Replaces the draft wholesale, e.g. from a multi-select prompt.
    pub fn replace_draft<I>(&mut self, store: &mut AvailabilityStore, days: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = EligibleDay>,
    {
        let days: AvailabilitySet = days.into_iter().collect();
        if let Some(bad) = days.iter().find(|d| !store.calendar().contains(d)) {
            return Err(DomainError::InvalidDay(bad.date()));
        }
        let previous = std::mem::replace(&mut self.draft, days);
        if self.mode == CommitMode::Live {
            if let Err(e) = self.commit(store) {
                self.draft = previous;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Commits the draft as the participant's full selection.
    pub fn confirm(&mut self, store: &mut AvailabilityStore) -> Result<(), DomainError> {
        self.commit(store)
    }

    /// Drops the draft without touching the store.
    pub fn discard(self) {
        debug!(participant = %self.participant, "participant edit discarded");
    }

    fn commit(&mut self, store: &mut AvailabilityStore) -> Result<(), DomainError> {
        store.set(&self.participant, self.draft.iter().copied())?;
        self.baseline = self.draft.clone();
        info!(
            participant = %self.participant,
            days = self.draft.len(),
            mode = ?self.mode,
            "availability committed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Calendar, Roster};
    use chrono::NaiveDate;

    fn day(m: u32, d: u32) -> EligibleDay {
        EligibleDay::new(NaiveDate::from_ymd_opt(2024, m, d).unwrap())
    }

    fn store() -> AvailabilityStore {
        let roster = Roster::new(["Anna", "Bogi", "Marci"]).unwrap();
        let calendar = Calendar::business_days(day(11, 10).date(), day(11, 15).date()).unwrap();
        AvailabilityStore::new(roster, calendar)
    }

    fn days_of(store: &AvailabilityStore, name: &str) -> Vec<EligibleDay> {
        store
            .get(&Participant::from(name))
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_grid_seeds_from_store() {
        let mut s = store();
        s.set(&Participant::from("Bogi"), [day(11, 12)]).unwrap();
        let grid = GridEdit::open(&s);
        assert_eq!(grid.cell(1, 1), Some(true));
        assert_eq!(grid.cell(1, 0), Some(false));
        assert_eq!(grid.cell(0, 1), Some(false));
        assert!(grid.changed_rows().is_empty());
    }

    #[test]
    fn test_grid_commits_only_changed_rows() {
        let mut s = store();
        let mut grid = GridEdit::open(&s);
        grid.toggle(0, 0).unwrap();
        grid.toggle(0, 4).unwrap();
        assert_eq!(grid.changed_rows(), vec![&Participant::from("Anna")]);

        let committed = grid.commit(&mut s).unwrap();
        assert_eq!(committed, vec![Participant::from("Anna")]);
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 11), day(11, 15)]);
        assert!(grid.changed_rows().is_empty());
    }

    #[test]
    fn test_grid_does_not_clobber_rows_edited_elsewhere() {
        let mut s = store();
        let mut grid = GridEdit::open(&s);

        // Another session updates Bogi after the grid was seeded.
        let mut single = ParticipantEdit::open(&s, &Participant::from("Bogi"), CommitMode::Live).unwrap();
        single.toggle(&mut s, day(11, 13)).unwrap();

        grid.toggle(2, 1).unwrap();
        grid.commit(&mut s).unwrap();

        assert_eq!(days_of(&s, "Bogi"), vec![day(11, 13)]);
        assert_eq!(days_of(&s, "Marci"), vec![day(11, 12)]);
    }

    #[test]
    fn test_grid_toggle_back_is_not_a_change() {
        let s = store();
        let mut grid = GridEdit::open(&s);
        assert!(grid.toggle(1, 2).unwrap());
        assert!(!grid.toggle(1, 2).unwrap());
        assert!(grid.changed_rows().is_empty());
    }

    #[test]
    fn test_grid_out_of_bounds() {
        let s = store();
        let mut grid = GridEdit::open(&s);
        assert_eq!(
            grid.toggle(3, 0).unwrap_err(),
            DomainError::CellOutOfRange { row: 3, col: 0 }
        );
        assert_eq!(
            grid.set_cell(0, 5, true).unwrap_err(),
            DomainError::CellOutOfRange { row: 0, col: 5 }
        );
        assert!(grid.changed_rows().is_empty());
    }

    #[test]
    fn test_grid_submit_row_is_all_or_nothing() {
        let mut s = store();
        let anna = Participant::from("Anna");
        s.set(&anna, [day(11, 11)]).unwrap();
        let mut grid = GridEdit::open(&s);

        let err = grid
            .submit_row(&mut s, &anna, &[day(11, 12), day(11, 16)])
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidDay(day(11, 16).date()));
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 11)]);
        assert_eq!(grid.cell(0, 0), Some(true));

        grid.submit_row(&mut s, &anna, &[day(11, 12)]).unwrap();
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 12)]);
        assert_eq!(grid.cell(0, 1), Some(true));
        assert!(grid.changed_rows().is_empty());
    }

    #[test]
    fn test_live_edit_commits_each_toggle() {
        let mut s = store();
        let anna = Participant::from("Anna");
        let mut edit = ParticipantEdit::open(&s, &anna, CommitMode::Live).unwrap();
        edit.toggle(&mut s, day(11, 14)).unwrap();
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 14)]);
        edit.toggle(&mut s, day(11, 11)).unwrap();
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 11), day(11, 14)]);
        edit.toggle(&mut s, day(11, 14)).unwrap();
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 11)]);
        assert!(!edit.has_pending_changes());
    }

    #[test]
    fn test_staged_edit_waits_for_confirm() {
        let mut s = store();
        let anna = Participant::from("Anna");
        let mut edit = ParticipantEdit::open(&s, &anna, CommitMode::Staged).unwrap();
        edit.toggle(&mut s, day(11, 12)).unwrap();
        edit.toggle(&mut s, day(11, 13)).unwrap();
        assert!(edit.has_pending_changes());
        assert!(days_of(&s, "Anna").is_empty());

        edit.confirm(&mut s).unwrap();
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 12), day(11, 13)]);
        assert!(!edit.has_pending_changes());
    }

    #[test]
    fn test_staged_discard_leaves_store() {
        let mut s = store();
        let anna = Participant::from("Anna");
        s.set(&anna, [day(11, 15)]).unwrap();
        let mut edit = ParticipantEdit::open(&s, &anna, CommitMode::Staged).unwrap();
        assert_eq!(edit.draft().len(), 1);
        edit.replace_draft(&mut s, [day(11, 11), day(11, 12)]).unwrap();
        edit.discard();
        assert_eq!(days_of(&s, "Anna"), vec![day(11, 15)]);
    }

    #[test]
    fn test_invalid_day_toggle_changes_nothing() {
        let mut s = store();
        let anna = Participant::from("Anna");
        let mut edit = ParticipantEdit::open(&s, &anna, CommitMode::Live).unwrap();
        let err = edit.toggle(&mut s, day(11, 16)).unwrap_err();
        assert_eq!(err, DomainError::InvalidDay(day(11, 16).date()));
        assert!(edit.draft().is_empty());
        assert!(days_of(&s, "Anna").is_empty());

        let err = edit
            .replace_draft(&mut s, [day(11, 11), day(11, 30)])
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidDay(day(11, 30).date()));
        assert!(edit.draft().is_empty());
    }

    #[test]
    fn test_open_unknown_participant() {
        let s = store();
        let err = ParticipantEdit::open(&s, &Participant::from("Ghost"), CommitMode::Staged).unwrap_err();
        assert_eq!(err, DomainError::UnknownParticipant("Ghost".into()));
    }
}
