//! Exercise category types.

use chrono::{DateTime, Utc};

use crate::workouts::Workout;

/// A named grouping of exercises (e.g. "Squats").
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Surrogate key assigned by the database
    pub id: i64,
    /// Unique category name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A category together with the workout rows that reference it, as shown
/// by the category listing.
#[derive(Debug, Clone)]
pub struct CategoryOverview {
    pub category: Category,
    pub workouts: Vec<Workout>,
}
