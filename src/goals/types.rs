//! Fitness goal types.

use chrono::{DateTime, Utc};

/// A fitness objective with zero or more attached workouts.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessGoal {
    /// Surrogate key assigned by the database
    pub id: i64,
    /// Free-text goal description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Join row linking a goal to a workout occurrence, with its own
/// completion flag.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalWorkout {
    pub id: i64,
    pub goal_id: i64,
    pub workout_id: i64,
    /// Starts false; only ever set to true (there is no un-complete)
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A workout as it appears under a goal listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedWorkout {
    pub name: String,
    pub completed: bool,
}

impl AttachedWorkout {
    /// Human-readable completion status.
    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Not completed"
        }
    }
}

/// A goal with its attached workouts and their completion status.
#[derive(Debug, Clone)]
pub struct GoalOverview {
    pub goal: FitnessGoal,
    pub workouts: Vec<AttachedWorkout>,
}

/// Outcome of batch-attaching workouts to a goal.
#[derive(Debug, Default)]
pub struct AttachReport {
    pub attached: Vec<String>,
    pub skipped: Vec<String>,
}
