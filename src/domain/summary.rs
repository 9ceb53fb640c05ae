//! Aggregator. Per-day counts and per-participant response status, recomputed on every call.

use crate::domain::{AvailabilityStore, EligibleDay, Participant, ResponseStatus};
use serde::Serialize;

/// Derived view of the store. Never cached across mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Aligned with `days`.
    pub days: Vec<EligibleDay>,
    pub per_day_counts: Vec<usize>,
    /// In roster order.
    pub response_status: Vec<(Participant, ResponseStatus)>,
}

impl Summary {
    pub fn compute(store: &AvailabilityStore) -> Self {
        let days = store.calendar().days().to_vec();
        let mut per_day_counts = vec![0usize; days.len()];
        let mut response_status = Vec::with_capacity(store.roster().len());

        for participant in store.roster().iter() {
            let selected = store.selected_count(participant);
            for (i, day) in days.iter().enumerate() {
                if store.contains_day(participant, day) {
                    per_day_counts[i] += 1;
                }
            }
            response_status.push((
                participant.clone(),
                ResponseStatus::from_selection_len(selected),
            ));
        }

        Self {
            days,
            per_day_counts,
            response_status,
        }
    }

    pub fn status_of(&self, participant: &Participant) -> Option<ResponseStatus> {
        self.response_status
            .iter()
            .find(|(p, _)| p == participant)
            .map(|(_, s)| *s)
    }

    pub fn pending(&self) -> Vec<&Participant> {
        self.response_status
            .iter()
            .filter(|(_, s)| s.is_pending())
            .map(|(p, _)| p)
            .collect()
    }

    pub fn responded_count(&self) -> usize {
        self.response_status.len() - self.pending().len()
    }

    /// Days with the highest count. Empty while nobody has picked anything.
    pub fn leading_days(&self) -> Vec<(EligibleDay, usize)> {
        let max = self.per_day_counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.days
            .iter()
            .zip(&self.per_day_counts)
            .filter(|(_, c)| **c == max)
            .map(|(d, c)| (*d, *c))
            .collect()
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

    fn store(names: &[&str], from: EligibleDay, to: EligibleDay) -> AvailabilityStore {
        let roster = Roster::new(names.iter().copied()).unwrap();
        let calendar = Calendar::business_days(from.date(), to.date()).unwrap();
        AvailabilityStore::new(roster, calendar)
    }

    #[test]
    fn test_week_scenario() {
        let mut s = store(&["Réka", "Reni"], day(11, 10), day(11, 15));
        let reni = Participant::from("Reni");
        s.set(&reni, [day(11, 11), day(11, 13)]).unwrap();

        let summary = Summary::compute(&s);
        assert_eq!(summary.per_day_counts, vec![1, 0, 1, 0, 0]);
        assert_eq!(summary.status_of(&reni), Some(ResponseStatus::Responded));
        assert_eq!(
            summary.status_of(&Participant::from("Réka")),
            Some(ResponseStatus::Pending)
        );
        assert_eq!(summary.pending(), vec![&Participant::from("Réka")]);
        assert_eq!(summary.responded_count(), 1);
    }

    #[test]
    fn test_counts_match_membership_after_many_sets() {
        let mut s = store(&["Anna", "Bogi", "Marci"], day(11, 10), day(11, 22));
        let anna = Participant::from("Anna");
        let bogi = Participant::from("Bogi");
        let marci = Participant::from("Marci");
        s.set(&anna, [day(11, 11), day(11, 18)]).unwrap();
        s.set(&bogi, [day(11, 18), day(11, 19), day(11, 22)]).unwrap();
        s.set(&marci, [day(11, 18)]).unwrap();
        s.set(&anna, [day(11, 22)]).unwrap();

        let summary = Summary::compute(&s);
        for (i, d) in summary.days.iter().enumerate() {
            let expected = s
                .roster()
                .iter()
                .filter(|p| s.get(p).unwrap().contains(d))
                .count();
            assert_eq!(summary.per_day_counts[i], expected, "day {}", d);
        }
        assert_eq!(summary.leading_days(), vec![(day(11, 18), 2), (day(11, 22), 2)]);
    }

    #[test]
    fn test_status_returns_to_pending_when_cleared() {
        let mut s = store(&["Anna"], day(11, 11), day(11, 15));
        let anna = Participant::from("Anna");
        s.set(&anna, [day(11, 12)]).unwrap();
        assert_eq!(
            Summary::compute(&s).status_of(&anna),
            Some(ResponseStatus::Responded)
        );
        s.set(&anna, Vec::<EligibleDay>::new()).unwrap();
        assert_eq!(
            Summary::compute(&s).status_of(&anna),
            Some(ResponseStatus::Pending)
        );
    }

    #[test]
    fn test_empty_roster_gives_zero_counts() {
        let s = store(&[], day(11, 11), day(11, 15));
        let summary = Summary::compute(&s);
        assert_eq!(summary.per_day_counts, vec![0; 5]);
        assert!(summary.response_status.is_empty());
        assert!(summary.leading_days().is_empty());
    }

    #[test]
    fn test_empty_day_range_gives_empty_counts() {
        let s = store(&["Anna", "Bogi"], day(11, 16), day(11, 17));
        let summary = Summary::compute(&s);
        assert!(summary.per_day_counts.is_empty());
        assert_eq!(summary.pending().len(), 2);
    }
}
