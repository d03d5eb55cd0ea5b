//! Workout session model types.

use chrono::NaiveDateTime;

/// A single logged exercise: movement name plus the set/rep/load scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Option<i64>,
    pub name: String,
    pub reps: u32,
    pub sets: u32,
    pub weight: f64,
}

impl Exercise {
    pub fn new(name: &str, reps: u32, sets: u32, weight: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            reps,
            sets,
            weight,
        }
    }

    /// One-line summary used in session listings.
    pub fn summary(&self) -> String {
        format!("{}: {} reps x {} sets, {:.2} lbs", self.name, self.reps, self.sets, self.weight)
    }
}

/// A workout session. Stays open while exercises are being staged and is
/// stamped with `completed_at` once the user finishes it.
#[derive(Debug, Clone)]
pub struct Workout {
    pub id: i64,
    pub started_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn is_open(&self) -> bool {
        self.completed_at.is_none()
    }
}
