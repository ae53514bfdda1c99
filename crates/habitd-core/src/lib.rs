pub mod error;
pub mod habit;
pub mod reminder;
pub mod report;

pub use error::HabitError;
pub use habit::{Habit, ReminderMessage, WeeklyReportEntry};
