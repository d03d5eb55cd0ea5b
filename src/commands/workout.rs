//! Workout logging command.
//!
//! Exercises are staged into an open session with `add`, sealed with
//! `done`, and reviewed with `show`/`list`. `clear` wipes the history after
//! confirmation.

use crate::db::workouts::Workouts;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::libs::workout::Exercise;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct WorkoutArgs {
    #[command(subcommand)]
    action: WorkoutAction,
}

#[derive(Debug, Subcommand)]
enum WorkoutAction {
    /// Add an exercise to the current workout
    Add {
        /// Exercise name
        name: String,
        /// Repetitions per set
        #[arg(short, long)]
        reps: u32,
        /// Number of sets
        #[arg(short, long)]
        sets: u32,
        /// Weight lifted
        #[arg(short, long)]
        weight: f64,
    },
    /// Complete the current workout
    Done,
    /// Show the current (in-progress) workout
    Show,
    /// List completed workouts
    List,
    /// Delete all workout history
    Clear,
}

pub async fn cmd(args: WorkoutArgs) -> Result<()> {
    let workouts = Workouts::new()?;

    match args.action {
        WorkoutAction::Add { name, reps, sets, weight } => {
            let name = name.trim();
            if name.is_empty() {
                msg_error!(Message::ExerciseInvalidName);
                return Ok(());
            }
            workouts.add_exercise(&Exercise::new(name, reps, sets, weight))?;
            msg_success!(Message::ExerciseAdded(name.to_string()));
        }
        WorkoutAction::Done => match workouts.complete_current()? {
            Some(count) => msg_success!(Message::WorkoutCompleted(count)),
            None => msg_print!(Message::WorkoutNothingToComplete),
        },
        WorkoutAction::Show => match workouts.current()? {
            Some(workout) => {
                msg_print!(Message::CurrentWorkoutTitle, true);
                View::workouts(std::slice::from_ref(&workout))?;
            }
            None => msg_print!(Message::NoOpenWorkout),
        },
        WorkoutAction::List => {
            let completed = workouts.fetch_completed()?;
            if completed.is_empty() {
                msg_print!(Message::NoWorkoutsLogged);
                return Ok(());
            }
            msg_print!(Message::WorkoutHistoryTitle, true);
            View::workouts(&completed)?;
        }
        WorkoutAction::Clear => {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmClearWorkouts.to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_print!(Message::WorkoutClearCancelled);
                return Ok(());
            }
            let deleted = workouts.clear()?;
            msg_success!(Message::WorkoutsCleared(deleted));
        }
    }

    Ok(())
}
