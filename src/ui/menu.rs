//! Interactive menu over the fitness tracker managers.
//!
//! The menu gathers already-parsed inputs and dispatches to the managers;
//! manager errors are printed and control returns to the loop. Only
//! terminal I/O failures propagate.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use crate::categories::{CategoryError, CategoryManager};
use crate::goals::{GoalError, GoalManager};
use crate::storage::Database;
use crate::workouts::{RoutineEntry, WorkoutError, WorkoutManager};

const MENU_ITEMS: &[&str] = &[
    "Add exercise category",
    "View exercises by category",
    "Delete exercise category",
    "Create workout routine",
    "View workout routines",
    "View exercise progress",
    "Set fitness goal",
    "Add workouts to fitness goal",
    "Mark workout completed in goal",
    "View progress towards fitness goals",
    "Quit",
];

/// Run the interactive menu loop until the operator quits.
pub fn run(db: &Database) -> Result<()> {
    loop {
        println!();
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        let conn = db.connection();
        match selection {
            0 => add_category(&CategoryManager::new(conn))?,
            1 => view_categories(&CategoryManager::new(conn))?,
            2 => delete_category(&CategoryManager::new(conn))?,
            3 => create_routine(&CategoryManager::new(conn), &WorkoutManager::new(conn))?,
            4 => view_routines(&WorkoutManager::new(conn))?,
            5 => view_exercise_progress(&WorkoutManager::new(conn))?,
            6 => set_goal(&GoalManager::new(conn))?,
            7 => add_workouts_to_goal(&GoalManager::new(conn), &WorkoutManager::new(conn))?,
            8 => mark_workout_completed(&GoalManager::new(conn))?,
            9 => view_goal_progress(&GoalManager::new(conn))?,
            _ => break,
        }
    }

    Ok(())
}

fn add_category(categories: &CategoryManager) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Name of the exercise category")
        .interact_text()?;

    match categories.add(&name) {
        Ok(_) => println!("Exercise category added."),
        Err(CategoryError::DuplicateName(_)) => println!("Category already exists."),
        Err(e) => println!("Failed to add category: {}", e),
    }

    Ok(())
}

fn view_categories(categories: &CategoryManager) -> Result<()> {
    let overviews = match categories.list_with_workouts() {
        Ok(overviews) => overviews,
        Err(e) => {
            println!("Failed to list categories: {}", e);
            return Ok(());
        }
    };

    if overviews.is_empty() {
        println!("No exercise categories yet.");
        return Ok(());
    }

    for overview in overviews {
        println!("{}", overview.category.name);
        for workout in overview.workouts {
            println!(
                "  - {}: {} sets of {} reps",
                workout.name, workout.sets, workout.reps
            );
        }
    }

    Ok(())
}

fn delete_category(categories: &CategoryManager) -> Result<()> {
    view_categories(categories)?;

    let name: String = Input::new()
        .with_prompt("Name of the category to delete")
        .interact_text()?;

    match categories.delete(&name) {
        // Deleting a name with no match is a silent no-op
        Ok(_) => println!("Category deleted."),
        Err(e) => println!("Failed to delete category: {}", e),
    }

    Ok(())
}

fn create_routine(categories: &CategoryManager, workouts: &WorkoutManager) -> Result<()> {
    let workout_name: String = Input::new()
        .with_prompt("Name of the workout")
        .interact_text()?;

    loop {
        view_categories(categories)?;

        let category_name: String = Input::new()
            .with_prompt("Category to add")
            .interact_text()?;
        let sets: u32 = Input::new()
            .with_prompt(format!("Sets for {}", category_name))
            .interact_text()?;
        let reps: u32 = Input::new()
            .with_prompt(format!("Reps for {}", category_name))
            .interact_text()?;

        let entry = RoutineEntry {
            category_name,
            sets,
            reps,
        };
        match workouts.add_to_routine(&workout_name, &entry) {
            Ok(workout) => println!(
                "Added {} sets of {} reps for category '{}' to the workout '{}'.",
                workout.sets, workout.reps, entry.category_name, workout_name
            ),
            Err(WorkoutError::UnknownCategory(name)) => {
                println!("Category '{}' does not exist.", name)
            }
            Err(e) => println!("Failed to add entry: {}", e),
        }

        if !Confirm::new()
            .with_prompt("Add another category to this workout?")
            .default(true)
            .interact()?
        {
            break;
        }
    }

    Ok(())
}

fn view_routines(workouts: &WorkoutManager) -> Result<()> {
    match workouts.list() {
        Ok(rows) if rows.is_empty() => println!("No workout routines yet."),
        Ok(rows) => {
            for workout in rows {
                println!(
                    "{}. {}: {} sets of {} reps",
                    workout.id, workout.name, workout.sets, workout.reps
                );
            }
        }
        Err(e) => println!("Failed to list workouts: {}", e),
    }

    Ok(())
}

fn view_exercise_progress(workouts: &WorkoutManager) -> Result<()> {
    match workouts.view_progress() {
        Ok(rows) if rows.is_empty() => println!("No workouts recorded yet."),
        Ok(rows) => {
            for workout in rows {
                println!(
                    "{}. {}: {} sets of {} reps completed",
                    workout.id, workout.name, workout.sets, workout.reps
                );
            }
        }
        Err(e) => println!("Failed to view progress: {}", e),
    }

    Ok(())
}

fn set_goal(goals: &GoalManager) -> Result<()> {
    let description: String = Input::new().with_prompt("Fitness goal").interact_text()?;

    match goals.set_goal(&description) {
        Ok(_) => println!("Fitness goal set."),
        Err(e) => println!("Failed to set goal: {}", e),
    }

    Ok(())
}

fn add_workouts_to_goal(goals: &GoalManager, workouts: &WorkoutManager) -> Result<()> {
    view_goal_progress(goals)?;

    let goal_id: i64 = Input::new()
        .with_prompt("Goal id to add workouts to")
        .interact_text()?;

    loop {
        view_routines(workouts)?;

        let workout_name: String = Input::new()
            .with_prompt("Workout to add to this goal")
            .interact_text()?;

        match goals.add_workout(goal_id, &workout_name) {
            Ok(_) => println!("Added workout '{}' to goal {}.", workout_name, goal_id),
            Err(GoalError::UnknownWorkout(_)) => println!("Workout does not exist."),
            Err(GoalError::GoalNotFound(_)) => {
                println!("Goal {} does not exist.", goal_id);
                return Ok(());
            }
            Err(e) => println!("Failed to add workout: {}", e),
        }

        if !Confirm::new()
            .with_prompt("Add another workout to this goal?")
            .default(true)
            .interact()?
        {
            break;
        }
    }

    Ok(())
}

fn mark_workout_completed(goals: &GoalManager) -> Result<()> {
    view_goal_progress(goals)?;

    let goal_id: i64 = Input::new().with_prompt("Goal id").interact_text()?;
    let workout_name: String = Input::new()
        .with_prompt("Workout to mark as completed")
        .interact_text()?;

    match goals.mark_completed(goal_id, &workout_name) {
        // A resolved workout that is not attached to the goal is a
        // silent no-op
        Ok(_) => println!(
            "Marked workout '{}' as completed for goal {}.",
            workout_name, goal_id
        ),
        Err(GoalError::UnknownWorkout(_)) => println!("Workout does not exist."),
        Err(e) => println!("Failed to mark workout: {}", e),
    }

    Ok(())
}

fn view_goal_progress(goals: &GoalManager) -> Result<()> {
    let overviews = match goals.view_progress() {
        Ok(overviews) => overviews,
        Err(e) => {
            println!("Failed to list goals: {}", e);
            return Ok(());
        }
    };

    if overviews.is_empty() {
        println!("No fitness goals yet.");
        return Ok(());
    }

    for overview in overviews {
        println!("{}. {}", overview.goal.id, overview.goal.description);
        for workout in overview.workouts {
            println!("  - {}: {}", workout.name, workout.status());
        }
    }

    Ok(())
}
