//! Weekly adherence aggregation.

use chrono::{Days, NaiveDate};

use crate::habit::{Habit, WeeklyReportEntry};

/// Count each habit's completions inside the trailing 7-day window
/// `[reference_date - 6 days, reference_date]`, inclusive on both ends.
///
/// Output order matches input order. Pure function of its inputs, so tests
/// run against a fixed reference date.
pub fn weekly_report(habits: &[Habit], reference_date: NaiveDate) -> Vec<WeeklyReportEntry> {
    let window_start = reference_date
        .checked_sub_days(Days::new(6))
        .unwrap_or(NaiveDate::MIN);

    habits
        .iter()
        .map(|habit| WeeklyReportEntry {
            name: habit.name.clone(),
            weekly_completion_count: habit
                .completions
                .iter()
                .filter(|d| **d >= window_start && **d <= reference_date)
                .count(),
            daily_goal: habit.daily_goal,
        })
        .collect()
}
