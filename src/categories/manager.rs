//! Exercise category management.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::types::{Category, CategoryOverview};
use crate::workouts::manager::parse_workout_row;

/// Manager for exercise categories.
pub struct CategoryManager<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryManager<'a> {
    /// Create a new category manager with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Add a new exercise category.
    ///
    /// Category names are unique; inserting an existing name fails with
    /// [`CategoryError::DuplicateName`].
    pub fn add(&self, name: &str) -> Result<Category, CategoryError> {
        let now = Utc::now();

        self.conn
            .execute(
                "INSERT INTO exercise_categories (name, created_at) VALUES (?1, ?2)",
                params![name, now.to_rfc3339()],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    CategoryError::DuplicateName(name.to_string())
                }
                other => CategoryError::DatabaseError(other),
            })?;

        Ok(Category {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
        })
    }

    /// Get all categories in insertion order.
    pub fn list(&self) -> Result<Vec<Category>, CategoryError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM exercise_categories ORDER BY id ASC")?;

        let rows = stmt.query_map([], parse_category_row)?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(CategoryError::from)
    }

    /// Get all categories in insertion order, each with the workout rows
    /// that reference it.
    pub fn list_with_workouts(&self) -> Result<Vec<CategoryOverview>, CategoryError> {
        let categories = self.list()?;

        let mut stmt = self.conn.prepare(
            "SELECT id, name, category_id, sets, reps, created_at
             FROM workouts WHERE category_id = ?1 ORDER BY id ASC",
        )?;

        let mut overviews = Vec::with_capacity(categories.len());
        for category in categories {
            let workouts = stmt
                .query_map(params![category.id], parse_workout_row)?
                .collect::<Result<Vec<_>, _>>()?;
            overviews.push(CategoryOverview { category, workouts });
        }

        Ok(overviews)
    }

    /// Delete a category by name.
    ///
    /// Returns whether a row was deleted; deleting a name that does not
    /// exist is a no-op. Workouts referencing the category keep their
    /// category_id and are left orphaned.
    pub fn delete(&self, name: &str) -> Result<bool, CategoryError> {
        let deleted = self.conn.execute(
            "DELETE FROM exercise_categories WHERE name = ?1",
            params![name],
        )?;

        Ok(deleted > 0)
    }

    /// Look up a category id by name.
    pub fn find_id_by_name(&self, name: &str) -> Result<Option<i64>, CategoryError> {
        self.conn
            .query_row(
                "SELECT id FROM exercise_categories WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(CategoryError::from)
    }
}

/// Parse a database row into a Category.
fn parse_category_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    let created_at_str: String = row.get(2)?;

    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

/// Category management errors.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Category '{0}' already exists")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use crate::workouts::{RoutineEntry, WorkoutManager};

    #[test]
    fn test_add_and_list_in_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        let manager = CategoryManager::new(db.connection());

        manager.add("Squats").unwrap();
        manager.add("Deadlifts").unwrap();
        manager.add("Bench Press").unwrap();

        let names: Vec<_> = manager
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Squats", "Deadlifts", "Bench Press"]);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        let manager = CategoryManager::new(db.connection());

        manager.add("Squats").unwrap();
        let result = manager.add("Squats");
        assert!(matches!(result, Err(CategoryError::DuplicateName(_))));

        // Count unchanged
        assert_eq!(manager.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_by_name() {
        let db = Database::open_in_memory().unwrap();
        let manager = CategoryManager::new(db.connection());

        manager.add("Squats").unwrap();
        assert!(manager.delete("Squats").unwrap());
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_nonexistent_is_noop() {
        let db = Database::open_in_memory().unwrap();
        let manager = CategoryManager::new(db.connection());

        manager.add("Squats").unwrap();
        assert!(!manager.delete("Pull Ups").unwrap());
        assert_eq!(manager.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_id_by_name() {
        let db = Database::open_in_memory().unwrap();
        let manager = CategoryManager::new(db.connection());

        let squats = manager.add("Squats").unwrap();
        assert_eq!(manager.find_id_by_name("Squats").unwrap(), Some(squats.id));
        assert_eq!(manager.find_id_by_name("Pull Ups").unwrap(), None);
    }

    #[test]
    fn test_list_with_workouts_groups_rows() {
        let db = Database::open_in_memory().unwrap();
        let manager = CategoryManager::new(db.connection());
        let workouts = WorkoutManager::new(db.connection());

        manager.add("Squats").unwrap();
        manager.add("Deadlifts").unwrap();

        workouts
            .add_to_routine(
                "Leg Day",
                &RoutineEntry {
                    category_name: "Squats".to_string(),
                    sets: 3,
                    reps: 10,
                },
            )
            .unwrap();

        let overviews = manager.list_with_workouts().unwrap();
        assert_eq!(overviews.len(), 2);
        assert_eq!(overviews[0].category.name, "Squats");
        assert_eq!(overviews[0].workouts.len(), 1);
        assert_eq!(overviews[0].workouts[0].name, "Leg Day");
        assert!(overviews[1].workouts.is_empty());
    }

    #[test]
    fn test_delete_leaves_workouts_orphaned() {
        let db = Database::open_in_memory().unwrap();
        let manager = CategoryManager::new(db.connection());
        let workouts = WorkoutManager::new(db.connection());

        let squats = manager.add("Squats").unwrap();
        workouts
            .add_to_routine(
                "Leg Day",
                &RoutineEntry {
                    category_name: "Squats".to_string(),
                    sets: 3,
                    reps: 10,
                },
            )
            .unwrap();

        assert!(manager.delete("Squats").unwrap());

        // The workout row survives with a dangling category_id
        let rows = workouts.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_id, Some(squats.id));
    }
}
