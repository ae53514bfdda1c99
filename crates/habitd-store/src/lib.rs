pub mod store;

pub use store::HabitStore;
