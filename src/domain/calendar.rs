//! Calendar generator: the ordered business days within `[start, end]`.

use crate::domain::{DomainError, EligibleDay};
use chrono::NaiveDate;

/// Fixed, strictly increasing sequence of eligible days for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    start: NaiveDate,
    end: NaiveDate,
    days: Vec<EligibleDay>,
}

impl Calendar {
    /// Every Monday..Friday date in the inclusive range.
    pub fn business_days(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        let days = start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(EligibleDay::new)
            .filter(EligibleDay::is_business_day)
            .collect();
        Ok(Self { start, end, days })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> &[EligibleDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Index of `day` in the sequence. Days are sorted, so this is a binary search.
    pub fn position(&self, day: &EligibleDay) -> Option<usize> {
        self.days.binary_search(day).ok()
    }

    pub fn contains(&self, day: &EligibleDay) -> bool {
        self.position(day).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sunday_to_friday_week() {
        let cal = Calendar::business_days(date(2024, 11, 10), date(2024, 11, 15)).unwrap();
        let got: Vec<NaiveDate> = cal.days().iter().map(|d| d.date()).collect();
        assert_eq!(
            got,
            vec![
                date(2024, 11, 11),
                date(2024, 11, 12),
                date(2024, 11, 13),
                date(2024, 11, 14),
                date(2024, 11, 15),
            ]
        );
    }

    #[test]
    fn test_default_range_has_only_weekdays_ascending() {
        let cal = Calendar::business_days(date(2024, 11, 10), date(2024, 12, 10)).unwrap();
        assert_eq!(cal.len(), 22);
        assert!(cal.days().windows(2).all(|w| w[0] < w[1]));
        assert!(
            cal.days()
                .iter()
                .all(|d| !matches!(d.date().weekday(), Weekday::Sat | Weekday::Sun))
        );
        assert_eq!(cal.days().first().unwrap().date(), date(2024, 11, 11));
        assert_eq!(cal.days().last().unwrap().date(), date(2024, 12, 10));
    }

    #[test]
    fn test_single_day_ranges() {
        let weekday = Calendar::business_days(date(2024, 11, 13), date(2024, 11, 13)).unwrap();
        assert_eq!(weekday.len(), 1);

        let weekend = Calendar::business_days(date(2024, 11, 16), date(2024, 11, 17)).unwrap();
        assert!(weekend.is_empty());
    }

    #[test]
    fn test_inverted_range_fails() {
        let err = Calendar::business_days(date(2024, 11, 15), date(2024, 11, 10)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidRange {
                start: date(2024, 11, 15),
                end: date(2024, 11, 10),
            }
        );
    }

    #[test]
    fn test_contains_rejects_weekend_and_out_of_range() {
        let cal = Calendar::business_days(date(2024, 11, 10), date(2024, 11, 22)).unwrap();
        assert!(cal.contains(&EligibleDay::new(date(2024, 11, 18))));
        assert!(!cal.contains(&EligibleDay::new(date(2024, 11, 16))));
        assert!(!cal.contains(&EligibleDay::new(date(2024, 11, 25))));
        assert_eq!(cal.position(&EligibleDay::new(date(2024, 11, 12))), Some(1));
    }
}
