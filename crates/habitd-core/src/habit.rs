use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked recurring activity.
///
/// `completions` is an ordered set of calendar dates: each date appears at
/// most once, and insertion order is the order the completions were recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    /// Target completion count per day. Immutable after creation.
    pub daily_goal: u32,
    pub completions: Vec<NaiveDate>,
}

impl Habit {
    pub fn new(id: u64, name: String, daily_goal: u32) -> Self {
        Self {
            id,
            name,
            daily_goal,
            completions: Vec::new(),
        }
    }

    /// Whether a completion is recorded for the given date.
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completions.contains(&date)
    }

    /// Record a completion for `date`. Returns false if one was already
    /// present (no mutation occurs).
    pub fn record_completion(&mut self, date: NaiveDate) -> bool {
        if self.completed_on(date) {
            return false;
        }
        self.completions.push(date);
        true
    }
}

/// Daily push notification listing habits not yet completed today.
/// Built fresh for each broadcast, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderMessage {
    pub kind: String,
    pub habit_names: Vec<String>,
}

impl ReminderMessage {
    pub fn new(habit_names: Vec<String>) -> Self {
        Self {
            kind: "reminder".into(),
            habit_names,
        }
    }
}

/// One habit's adherence over the trailing 7-day window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReportEntry {
    pub name: String,
    pub weekly_completion_count: usize,
    pub daily_goal: u32,
}
