//! Database schema definitions for wodlog.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Exercise categories table
CREATE TABLE IF NOT EXISTS exercise_categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

-- Workouts table. One row pairs a routine name with a single category's
-- sets/reps; routine names are intentionally not unique, a routine is the
-- set of rows sharing a name.
CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category_id INTEGER REFERENCES exercise_categories(id),
    sets INTEGER NOT NULL,
    reps INTEGER NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_workouts_category_id ON workouts(category_id);

-- Fitness goals table
CREATE TABLE IF NOT EXISTS fitness_goals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Goal/workout join table with a per-pair completion flag
CREATE TABLE IF NOT EXISTS goal_workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    goal_id INTEGER NOT NULL REFERENCES fitness_goals(id),
    workout_id INTEGER NOT NULL REFERENCES workouts(id),
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_goal_workouts_goal_id ON goal_workouts(goal_id);
"#;

/// SQL for schema version tracking (migrations)
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 1;
