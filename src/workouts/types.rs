//! Workout routine types.

use chrono::{DateTime, Utc};

/// One workout row: a routine name paired with a single category's
/// sets/reps. A routine is the set of rows sharing a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    /// Surrogate key assigned by the database
    pub id: i64,
    /// Routine name (not unique)
    pub name: String,
    /// Referenced exercise category; dangling after a category delete
    pub category_id: Option<i64>,
    /// Number of sets
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A parsed (category, sets, reps) triple destined for a routine.
#[derive(Debug, Clone)]
pub struct RoutineEntry {
    pub category_name: String,
    pub sets: u32,
    pub reps: u32,
}

/// Outcome of a batch routine creation: what was inserted and which
/// entries were skipped because their category could not be resolved.
#[derive(Debug, Default)]
pub struct RoutineReport {
    pub added: Vec<Workout>,
    pub skipped: Vec<RoutineEntry>,
}
