//! Fitness goal management.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::types::{AttachReport, AttachedWorkout, FitnessGoal, GoalOverview, GoalWorkout};
use crate::workouts::{WorkoutError, WorkoutManager};

/// Manager for fitness goals.
pub struct GoalManager<'a> {
    conn: &'a Connection,
}

impl<'a> GoalManager<'a> {
    /// Create a new goal manager with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Set a new fitness goal.
    pub fn set_goal(&self, description: &str) -> Result<FitnessGoal, GoalError> {
        let now = Utc::now();

        self.conn.execute(
            "INSERT INTO fitness_goals (description, created_at) VALUES (?1, ?2)",
            params![description, now.to_rfc3339()],
        )?;

        Ok(FitnessGoal {
            id: self.conn.last_insert_rowid(),
            description: description.to_string(),
            created_at: now,
        })
    }

    /// Get a goal by id.
    pub fn get(&self, id: i64) -> Result<Option<FitnessGoal>, GoalError> {
        self.conn
            .query_row(
                "SELECT id, description, created_at FROM fitness_goals WHERE id = ?1",
                params![id],
                parse_goal_row,
            )
            .optional()
            .map_err(GoalError::from)
    }

    /// Get all goals in insertion order, each with its attached workouts
    /// and their completion status.
    pub fn list_goals(&self) -> Result<Vec<GoalOverview>, GoalError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, description, created_at FROM fitness_goals ORDER BY id ASC")?;
        let goals = stmt
            .query_map([], parse_goal_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut join_stmt = self.conn.prepare(
            "SELECT w.name, gw.completed FROM workouts w
             JOIN goal_workouts gw ON w.id = gw.workout_id
             WHERE gw.goal_id = ?1 ORDER BY gw.id ASC",
        )?;

        let mut overviews = Vec::with_capacity(goals.len());
        for goal in goals {
            let workouts = join_stmt
                .query_map(params![goal.id], |row| {
                    Ok(AttachedWorkout {
                        name: row.get(0)?,
                        completed: row.get::<_, i64>(1)? != 0,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            overviews.push(GoalOverview { goal, workouts });
        }

        Ok(overviews)
    }

    /// Attach a workout to a goal by routine name, not yet completed.
    ///
    /// Both sides are resolved before inserting: a missing goal aborts
    /// with [`GoalError::GoalNotFound`], an unresolved workout name with
    /// [`GoalError::UnknownWorkout`].
    pub fn add_workout(&self, goal_id: i64, workout_name: &str) -> Result<GoalWorkout, GoalError> {
        if self.get(goal_id)?.is_none() {
            return Err(GoalError::GoalNotFound(goal_id));
        }

        let workouts = WorkoutManager::new(self.conn);
        let workout_id = workouts
            .find_id_by_name(workout_name)?
            .ok_or_else(|| GoalError::UnknownWorkout(workout_name.to_string()))?;

        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO goal_workouts (goal_id, workout_id, completed, created_at)
             VALUES (?1, ?2, 0, ?3)",
            params![goal_id, workout_id, now.to_rfc3339()],
        )?;

        Ok(GoalWorkout {
            id: self.conn.last_insert_rowid(),
            goal_id,
            workout_id,
            completed: false,
            created_at: now,
        })
    }

    /// Attach a batch of workouts to a goal by routine name.
    ///
    /// Unknown workout names are skipped and reported; the rest are
    /// attached in order.
    pub fn add_workouts(&self, goal_id: i64, names: &[String]) -> Result<AttachReport, GoalError> {
        let mut report = AttachReport::default();

        for name in names {
            match self.add_workout(goal_id, name) {
                Ok(_) => report.attached.push(name.clone()),
                Err(GoalError::UnknownWorkout(_)) => {
                    tracing::warn!("Unknown workout '{}', skipping", name);
                    report.skipped.push(name.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Mark an attached workout as completed for a goal.
    ///
    /// Returns whether a join row was updated. An unknown workout name
    /// aborts with [`GoalError::UnknownWorkout`]; a resolved workout that
    /// is not attached to the goal updates nothing and returns false.
    pub fn mark_completed(&self, goal_id: i64, workout_name: &str) -> Result<bool, GoalError> {
        let workouts = WorkoutManager::new(self.conn);
        let workout_id = workouts
            .find_id_by_name(workout_name)?
            .ok_or_else(|| GoalError::UnknownWorkout(workout_name.to_string()))?;

        let updated = self.conn.execute(
            "UPDATE goal_workouts SET completed = 1 WHERE goal_id = ?1 AND workout_id = ?2",
            params![goal_id, workout_id],
        )?;

        Ok(updated > 0)
    }

    /// View progress towards all goals; the goal listing already carries
    /// completion status.
    pub fn view_progress(&self) -> Result<Vec<GoalOverview>, GoalError> {
        self.list_goals()
    }
}

/// Parse a database row into a FitnessGoal.
fn parse_goal_row(row: &rusqlite::Row) -> rusqlite::Result<FitnessGoal> {
    let created_at_str: String = row.get(2)?;

    Ok(FitnessGoal {
        id: row.get(0)?,
        description: row.get(1)?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

/// Goal management errors.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Workout lookup failed: {0}")]
    WorkoutLookup(#[from] WorkoutError),

    #[error("Goal {0} does not exist")]
    GoalNotFound(i64),

    #[error("Workout '{0}' does not exist")]
    UnknownWorkout(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CategoryManager;
    use crate::storage::Database;
    use crate::workouts::RoutineEntry;

    /// Seed a category and one "Leg Day" workout row.
    fn seed_leg_day(db: &Database) {
        let categories = CategoryManager::new(db.connection());
        let workouts = WorkoutManager::new(db.connection());

        categories.add("Squats").unwrap();
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
    }

    #[test]
    fn test_set_goal_and_list() {
        let db = Database::open_in_memory().unwrap();
        let manager = GoalManager::new(db.connection());

        manager.set_goal("Run 5k").unwrap();
        manager.set_goal("Bench bodyweight").unwrap();

        let overviews = manager.list_goals().unwrap();
        assert_eq!(overviews.len(), 2);
        assert_eq!(overviews[0].goal.description, "Run 5k");
        assert_eq!(overviews[1].goal.description, "Bench bodyweight");
        assert!(overviews[0].workouts.is_empty());
    }

    #[test]
    fn test_attach_and_mark_completed() {
        let db = Database::open_in_memory().unwrap();
        seed_leg_day(&db);
        let manager = GoalManager::new(db.connection());

        let goal = manager.set_goal("Run 5k").unwrap();
        manager.add_workout(goal.id, "Leg Day").unwrap();

        let overviews = manager.list_goals().unwrap();
        assert_eq!(overviews[0].workouts.len(), 1);
        assert_eq!(overviews[0].workouts[0].status(), "Not completed");

        assert!(manager.mark_completed(goal.id, "Leg Day").unwrap());

        let overviews = manager.list_goals().unwrap();
        assert_eq!(overviews[0].workouts[0].status(), "Completed");
    }

    #[test]
    fn test_add_workout_unknown_workout() {
        let db = Database::open_in_memory().unwrap();
        let manager = GoalManager::new(db.connection());

        let goal = manager.set_goal("Run 5k").unwrap();
        let result = manager.add_workout(goal.id, "Leg Day");
        assert!(matches!(result, Err(GoalError::UnknownWorkout(_))));

        assert!(manager.list_goals().unwrap()[0].workouts.is_empty());
    }

    #[test]
    fn test_add_workout_unknown_goal() {
        let db = Database::open_in_memory().unwrap();
        seed_leg_day(&db);
        let manager = GoalManager::new(db.connection());

        let result = manager.add_workout(42, "Leg Day");
        assert!(matches!(result, Err(GoalError::GoalNotFound(42))));
    }

    #[test]
    fn test_mark_completed_unattached_pair_is_noop() {
        let db = Database::open_in_memory().unwrap();
        seed_leg_day(&db);
        let manager = GoalManager::new(db.connection());

        // Workout exists but was never attached to this goal
        let goal = manager.set_goal("Run 5k").unwrap();
        assert!(!manager.mark_completed(goal.id, "Leg Day").unwrap());

        assert!(manager.list_goals().unwrap()[0].workouts.is_empty());
    }

    #[test]
    fn test_add_workouts_batch_skips_unknown() {
        let db = Database::open_in_memory().unwrap();
        seed_leg_day(&db);
        let manager = GoalManager::new(db.connection());

        let goal = manager.set_goal("Run 5k").unwrap();
        let names = ["Leg Day".to_string(), "Arm Day".to_string()];
        let report = manager.add_workouts(goal.id, &names).unwrap();

        assert_eq!(report.attached, vec!["Leg Day"]);
        assert_eq!(report.skipped, vec!["Arm Day"]);

        let overviews = manager.list_goals().unwrap();
        assert_eq!(overviews[0].workouts.len(), 1);
        assert_eq!(overviews[0].workouts[0].name, "Leg Day");
    }

    #[test]
    fn test_completion_tracked_per_goal() {
        let db = Database::open_in_memory().unwrap();
        seed_leg_day(&db);
        let manager = GoalManager::new(db.connection());

        let first = manager.set_goal("Run 5k").unwrap();
        let second = manager.set_goal("Bench bodyweight").unwrap();
        manager.add_workout(first.id, "Leg Day").unwrap();
        manager.add_workout(second.id, "Leg Day").unwrap();

        manager.mark_completed(first.id, "Leg Day").unwrap();

        let overviews = manager.list_goals().unwrap();
        assert_eq!(overviews[0].workouts[0].status(), "Completed");
        assert_eq!(overviews[1].workouts[0].status(), "Not completed");
    }
}
