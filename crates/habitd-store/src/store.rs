use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use tracing::instrument;

use habitd_core::{Habit, HabitError};

#[derive(Default)]
struct Inner {
    habits: Vec<Habit>,
    /// Strictly increasing, decoupled from `habits.len()` so ids are never
    /// reused if deletion is ever added.
    next_id: u64,
}

/// Thread-safe in-memory habit collection.
///
/// The handle is cheap to clone; all clones share one mutex-guarded
/// collection. Every operation locks for its full duration, so each
/// create/complete call is atomic relative to the others.
#[derive(Clone, Default)]
pub struct HabitStore {
    inner: Arc<Mutex<Inner>>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a habit with the next id and an empty completion set.
    ///
    /// Rejects an empty name or a zero goal before touching the collection.
    #[instrument(skip(self), fields(name, daily_goal))]
    pub fn create(&self, name: &str, daily_goal: u32) -> Result<Habit, HabitError> {
        if name.is_empty() {
            return Err(HabitError::InvalidInput("name is required".into()));
        }
        if daily_goal == 0 {
            return Err(HabitError::InvalidInput(
                "daily goal must be positive".into(),
            ));
        }

        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let habit = Habit::new(inner.next_id, name.to_string(), daily_goal);
        inner.habits.push(habit.clone());
        tracing::info!(id = habit.id, name = %habit.name, "habit created");
        Ok(habit)
    }

    /// Record a completion of habit `id` for `today`.
    ///
    /// Idempotent: if `today` is already present nothing changes. The date is
    /// supplied by the caller rather than read from the clock here, so the
    /// operation is deterministic given its inputs. Returns the (possibly
    /// unchanged) habit.
    #[instrument(skip(self), fields(id, %today))]
    pub fn mark_completed_today(&self, id: u64, today: NaiveDate) -> Result<Habit, HabitError> {
        let mut inner = self.inner.lock();
        let habit = inner
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(HabitError::NotFound(id))?;

        if habit.record_completion(today) {
            tracing::info!(id, name = %habit.name, "completion recorded");
        }
        Ok(habit.clone())
    }

    /// Owned snapshot of all habits in creation order.
    ///
    /// Callers iterate the snapshot freely; concurrent mutations affect only
    /// later calls.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<Habit> {
        self.inner.lock().habits.clone()
    }
}
