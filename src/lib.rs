//! wodlog - personal fitness tracker
//!
//! A menu-driven console utility that records exercise categories,
//! workout routines (sets/reps per category), and fitness goals with
//! per-goal workout completion, persisted in SQLite.

pub mod categories;
pub mod goals;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use categories::CategoryManager;
pub use goals::GoalManager;
pub use storage::Database;
pub use workouts::WorkoutManager;
