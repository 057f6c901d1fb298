//! Weekend pairing query.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use wj_model::{ServiceRecord, WeekendRole};

/// Label services on consecutive calendar days.
///
/// Over the sorted distinct dates, each adjacent pair exactly one day apart
/// labels the earlier date "Saturday Worship" and the later "Sunday
/// Worship". Pairing is greedy left to right; a date claimed by a pair is
/// not reused, and unpaired dates carry no label. Derived on demand, never
/// stored on the records.
pub fn weekend_roles(records: &[ServiceRecord]) -> BTreeMap<NaiveDate, WeekendRole> {
    let mut dates: Vec<NaiveDate> = records.iter().map(|record| record.date).collect();
    dates.sort_unstable();
    dates.dedup();
    let mut roles = BTreeMap::new();
    let mut idx = 0;
    while idx + 1 < dates.len() {
        if dates[idx].succ_opt() == Some(dates[idx + 1]) {
            roles.insert(dates[idx], WeekendRole::Saturday);
            roles.insert(dates[idx + 1], WeekendRole::Sunday);
            idx += 2;
        } else {
            idx += 1;
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(y: i32, m: u32, d: u32) -> ServiceRecord {
        ServiceRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
            leader: "Phoebe".to_string(),
            theme: String::new(),
            praise1: Vec::new(),
            praise2: Vec::new(),
            peace: Vec::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn consecutive_days_pair_up() {
        let records = vec![record(2025, 5, 31), record(2025, 6, 1)];
        let roles = weekend_roles(&records);
        assert_eq!(roles.get(&date(2025, 5, 31)), Some(&WeekendRole::Saturday));
        assert_eq!(roles.get(&date(2025, 6, 1)), Some(&WeekendRole::Sunday));
    }

    #[test]
    fn isolated_dates_are_unlabeled() {
        let records = vec![record(2025, 6, 1), record(2025, 6, 8)];
        let roles = weekend_roles(&records);
        assert!(roles.is_empty());
    }

    #[test]
    fn pairing_spans_a_month_boundary() {
        let records = vec![record(2025, 2, 28), record(2025, 3, 1)];
        let roles = weekend_roles(&records);
        assert_eq!(roles.get(&date(2025, 2, 28)), Some(&WeekendRole::Saturday));
    }

    #[test]
    fn three_consecutive_days_pair_greedily() {
        let records = vec![record(2025, 6, 6), record(2025, 6, 7), record(2025, 6, 8)];
        let roles = weekend_roles(&records);
        assert_eq!(roles.get(&date(2025, 6, 6)), Some(&WeekendRole::Saturday));
        assert_eq!(roles.get(&date(2025, 6, 7)), Some(&WeekendRole::Sunday));
        assert_eq!(roles.get(&date(2025, 6, 8)), None);
    }

    #[test]
    fn unsorted_input_is_handled() {
        let records = vec![record(2025, 6, 1), record(2025, 5, 31)];
        let roles = weekend_roles(&records);
        assert_eq!(roles.get(&date(2025, 5, 31)), Some(&WeekendRole::Saturday));
        assert_eq!(roles.get(&date(2025, 6, 1)), Some(&WeekendRole::Sunday));
    }
}
