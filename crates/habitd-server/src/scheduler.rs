//! Daily reminder trigger.
//!
//! One recurring task fires at a fixed local wall-clock time, snapshots the
//! store, evaluates which habits still need doing, and fans the resulting
//! message out to every connected subscriber. The task holds no state between
//! firings.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, Local, NaiveDateTime, NaiveTime};

use habitd_core::reminder::incomplete;
use habitd_core::ReminderMessage;
use habitd_store::HabitStore;

use crate::client::ClientRegistry;

/// Next occurrence of `fire_at` strictly after `now`: today if the time is
/// still ahead, otherwise tomorrow.
pub fn next_fire(now: NaiveDateTime, fire_at: NaiveTime) -> NaiveDateTime {
    if now.time() < fire_at {
        now.date().and_time(fire_at)
    } else {
        now.date()
            .checked_add_days(Days::new(1))
            .unwrap_or(now.date())
            .and_time(fire_at)
    }
}

/// One scheduler firing: snapshot, evaluate, broadcast.
///
/// An empty name list is still broadcast; per-subscriber delivery failures
/// are absorbed inside `broadcast_all`. Serialization of the message cannot
/// fail for this shape, but a failure would only skip the firing, never
/// abort the loop.
pub fn reminder_tick(store: &HabitStore, registry: &ClientRegistry, today: chrono::NaiveDate) {
    let snapshot = store.list();
    let names = incomplete(&snapshot, today);
    let message = ReminderMessage::new(names);

    match serde_json::to_string(&message) {
        Ok(json) => {
            let delivered = registry.broadcast_all(&json);
            tracing::info!(
                incomplete = message.habit_names.len(),
                delivered,
                "daily reminder broadcast"
            );
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize reminder"),
    }
}

/// Spawn the recurring daily trigger.
pub fn start(
    store: HabitStore,
    registry: Arc<ClientRegistry>,
    fire_at: NaiveTime,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = Local::now().naive_local();
            let next = next_fire(now, fire_at);
            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
            tracing::debug!(next = %next, "reminder scheduled");
            tokio::time::sleep(wait).await;

            reminder_tick(&store, &registry, Local::now().date_naive());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    #[test]
    fn next_fire_later_today() {
        let next = next_fire(dt("2024-01-10 06:30:00"), time("08:00:00"));
        assert_eq!(next, dt("2024-01-10 08:00:00"));
    }

    #[test]
    fn next_fire_rolls_to_tomorrow() {
        let next = next_fire(dt("2024-01-10 08:00:00"), time("08:00:00"));
        assert_eq!(next, dt("2024-01-11 08:00:00"));

        let next = next_fire(dt("2024-01-10 23:59:59"), time("08:00:00"));
        assert_eq!(next, dt("2024-01-11 08:00:00"));
    }

    #[test]
    fn next_fire_crosses_month_boundary() {
        let next = next_fire(dt("2024-01-31 09:00:00"), time("08:00:00"));
        assert_eq!(next, dt("2024-02-01 08:00:00"));
    }

    #[test]
    fn tick_broadcasts_incomplete_habits() {
        let store = HabitStore::new();
        let registry = ClientRegistry::new(32);
        let (_id, mut rx) = registry.register();

        let read = store.create("Read", 1).unwrap();
        let _ = store.create("Run", 1).unwrap();
        let today = NaiveDate::parse_from_str("2024-01-10", "%Y-%m-%d").unwrap();
        let _ = store.mark_completed_today(read.id, today).unwrap();

        reminder_tick(&store, &registry, today);

        let json: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
        assert_eq!(json["kind"], "reminder");
        assert_eq!(json["habitNames"], serde_json::json!(["Run"]));
    }

    #[test]
    fn tick_broadcasts_even_when_nothing_incomplete() {
        let store = HabitStore::new();
        let registry = ClientRegistry::new(32);
        let (_id, mut rx) = registry.register();

        let today = NaiveDate::parse_from_str("2024-01-10", "%Y-%m-%d").unwrap();
        reminder_tick(&store, &registry, today);

        let json: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
        assert_eq!(json["kind"], "reminder");
        assert_eq!(json["habitNames"], serde_json::json!([]));
    }

    #[test]
    fn tick_with_no_subscribers_is_harmless() {
        let store = HabitStore::new();
        let registry = ClientRegistry::new(32);
        let _ = store.create("Read", 1).unwrap();

        let today = NaiveDate::parse_from_str("2024-01-10", "%Y-%m-%d").unwrap();
        reminder_tick(&store, &registry, today);
    }
}
