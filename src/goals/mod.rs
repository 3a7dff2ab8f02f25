//! Fitness goals module.
//!
//! Goals collect workout routines and track completion independently per
//! attached workout.

pub mod manager;
pub mod types;

pub use manager::{GoalError, GoalManager};
pub use types::{AttachReport, AttachedWorkout, FitnessGoal, GoalOverview, GoalWorkout};
