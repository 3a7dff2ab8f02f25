//! Workout routines module.
//!
//! A routine is a named set of workout rows, one per exercise category
//! with its own sets/reps.

pub mod manager;
pub mod types;

pub use manager::{WorkoutError, WorkoutManager};
pub use types::{RoutineEntry, RoutineReport, Workout};
