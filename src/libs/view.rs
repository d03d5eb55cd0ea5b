//! Terminal table rendering for workouts, history, and estimates.

use crate::libs::formatter::format_clock;
use crate::libs::onerm::{bodyweight_adjusted, Formula, ALL_FORMULAS};
use crate::libs::workout::Workout;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a list of workouts with their exercises, most recent first.
    pub fn workouts(workouts: &[Workout]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "EXERCISE", "REPS", "SETS", "WEIGHT"]);
        for workout in workouts {
            let date = workout.started_at.format("%Y-%m-%d %H:%M").to_string();
            if workout.exercises.is_empty() {
                table.add_row(row![date, "-", "-", "-", "-"]);
                continue;
            }
            for (i, exercise) in workout.exercises.iter().enumerate() {
                let date_cell = if i == 0 { date.as_str() } else { "" };
                table.add_row(row![
                    date_cell,
                    exercise.name,
                    exercise.reps,
                    exercise.sets,
                    format!("{:.2}", exercise.weight)
                ]);
            }
        }
        table.printstd();

        Ok(())
    }

    /// Renders the recent rest durations, most recently used first.
    pub fn recents(durations: &[u64]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DURATION", "SECONDS"]);
        for (index, &secs) in durations.iter().enumerate() {
            table.add_row(row![index + 1, format_clock(secs), secs]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders every formula's estimate side by side, flagging the chosen
    /// one and appending the bodyweight-adjusted figure when available.
    pub fn estimates(weight: f64, reps: u32, chosen: Formula, bodyweight: Option<f64>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FORMULA", "ESTIMATED 1RM", "ADJUSTED"]);
        for formula in ALL_FORMULAS {
            let marker = if formula == chosen { "* " } else { "" };
            let estimate = formula.estimate(weight, reps);
            let estimate_cell = estimate.map_or_else(|| "n/a".to_string(), |rm| format!("{:.2}", rm));
            let adjusted_cell = match (estimate, bodyweight) {
                (Some(rm), Some(bw)) => format!("{:.2}", bodyweight_adjusted(rm, bw)),
                _ => "-".to_string(),
            };
            table.add_row(row![format!("{}{}", marker, formula.name()), estimate_cell, adjusted_cell]);
        }
        table.printstd();

        Ok(())
    }
}
