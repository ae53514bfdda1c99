//! Reminder evaluation: which habits still need doing today.

use chrono::NaiveDate;

use crate::habit::Habit;

/// Names of the habits with no completion recorded for `today`, in the same
/// relative order as the input. Pure function; the scheduler wraps the result
/// in a `ReminderMessage`.
pub fn incomplete(habits: &[Habit], today: NaiveDate) -> Vec<String> {
    habits
        .iter()
        .filter(|habit| !habit.completed_on(today))
        .map(|habit| habit.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn completed_today_excluded() {
        let mut read = Habit::new(1, "Read".into(), 1);
        assert!(read.record_completion(date("2024-01-10")));
        let run = Habit::new(2, "Run".into(), 1);

        let names = incomplete(&[run, read], date("2024-01-10"));
        assert_eq!(names, vec!["Run".to_string()]);
    }

    #[test]
    fn other_dates_do_not_count() {
        let mut read = Habit::new(1, "Read".into(), 1);
        assert!(read.record_completion(date("2024-01-09")));
        assert!(read.record_completion(date("2024-01-11")));

        let names = incomplete(&[read], date("2024-01-10"));
        assert_eq!(names, vec!["Read".to_string()]);
    }

    #[test]
    fn all_complete_yields_empty_list() {
        let mut read = Habit::new(1, "Read".into(), 1);
        assert!(read.record_completion(date("2024-01-10")));
        assert!(incomplete(&[read], date("2024-01-10")).is_empty());
    }

    #[test]
    fn input_order_preserved() {
        let habits = vec![
            Habit::new(1, "c".into(), 1),
            Habit::new(2, "a".into(), 1),
            Habit::new(3, "b".into(), 1),
        ];
        let names = incomplete(&habits, date("2024-01-10"));
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(incomplete(&[], date("2024-01-10")).is_empty());
    }
}
