//! Workout routine management.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::types::{RoutineEntry, RoutineReport, Workout};
use crate::categories::{CategoryError, CategoryManager};

/// Manager for workout routines.
pub struct WorkoutManager<'a> {
    conn: &'a Connection,
}

impl<'a> WorkoutManager<'a> {
    /// Create a new workout manager with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Add a single entry to a routine.
    ///
    /// The entry's category name is resolved before inserting; an unknown
    /// category aborts this entry with [`WorkoutError::UnknownCategory`]
    /// and inserts nothing.
    pub fn add_to_routine(
        &self,
        workout_name: &str,
        entry: &RoutineEntry,
    ) -> Result<Workout, WorkoutError> {
        let categories = CategoryManager::new(self.conn);
        let category_id = categories
            .find_id_by_name(&entry.category_name)?
            .ok_or_else(|| WorkoutError::UnknownCategory(entry.category_name.clone()))?;

        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO workouts (name, category_id, sets, reps, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                workout_name,
                category_id,
                entry.sets,
                entry.reps,
                now.to_rfc3339()
            ],
        )?;

        Ok(Workout {
            id: self.conn.last_insert_rowid(),
            name: workout_name.to_string(),
            category_id: Some(category_id),
            sets: entry.sets,
            reps: entry.reps,
            created_at: now,
        })
    }

    /// Create a routine from a batch of entries.
    ///
    /// Entries with unknown categories are skipped and reported; the rest
    /// are inserted in order.
    pub fn create(
        &self,
        workout_name: &str,
        entries: &[RoutineEntry],
    ) -> Result<RoutineReport, WorkoutError> {
        let mut report = RoutineReport::default();

        for entry in entries {
            match self.add_to_routine(workout_name, entry) {
                Ok(workout) => report.added.push(workout),
                Err(WorkoutError::UnknownCategory(name)) => {
                    tracing::warn!("Unknown category '{}', skipping entry", name);
                    report.skipped.push(entry.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Get all workout rows in insertion order.
    pub fn list(&self) -> Result<Vec<Workout>, WorkoutError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category_id, sets, reps, created_at
             FROM workouts ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], parse_workout_row)?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(WorkoutError::from)
    }

    /// Same projection as `list`; a workout has no progress state of its
    /// own, completion is tracked per goal.
    pub fn view_progress(&self) -> Result<Vec<Workout>, WorkoutError> {
        self.list()
    }

    /// Look up a workout id by routine name.
    ///
    /// Routine names are not unique; the oldest matching row wins.
    pub fn find_id_by_name(&self, name: &str) -> Result<Option<i64>, WorkoutError> {
        self.conn
            .query_row(
                "SELECT id FROM workouts WHERE name = ?1 ORDER BY id ASC LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(WorkoutError::from)
    }
}

/// Parse a database row into a Workout.
pub(crate) fn parse_workout_row(row: &rusqlite::Row) -> rusqlite::Result<Workout> {
    let created_at_str: String = row.get(5)?;

    Ok(Workout {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: row.get(2)?,
        sets: row.get(3)?,
        reps: row.get(4)?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

/// Workout management errors.
#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Category lookup failed: {0}")]
    CategoryLookup(#[from] CategoryError),

    #[error("Category '{0}' does not exist")]
    UnknownCategory(String),
}
