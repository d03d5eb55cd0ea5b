//! Database operations for workout sessions and their exercises.
//!
//! A workout stays "open" (no `completed_at`) while exercises are staged
//! into it, so a session assembled across several CLI invocations survives
//! until the user completes it. At most one open workout exists at a time;
//! adding an exercise creates one on demand.

use crate::db::db::Db;
use crate::libs::workout::{Exercise, Workout};
use anyhow::Result;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::sync::Arc;

/// SQL schema for workout sessions and their exercises.
const SCHEMA_WORKOUTS: &str = "CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER NOT NULL PRIMARY KEY,
    started_at TIMESTAMP NOT NULL,
    completed_at TIMESTAMP
);
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER NOT NULL PRIMARY KEY,
    workout_id INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    reps INTEGER NOT NULL,
    sets INTEGER NOT NULL,
    weight REAL NOT NULL
);";

const INSERT_WORKOUT: &str = "INSERT INTO workouts (started_at) VALUES (datetime(CURRENT_TIMESTAMP, 'localtime'))";
const SELECT_OPEN_WORKOUT: &str = "SELECT id, started_at FROM workouts WHERE completed_at IS NULL ORDER BY id DESC LIMIT 1";
const COMPLETE_WORKOUT: &str = "UPDATE workouts SET completed_at = (datetime(CURRENT_TIMESTAMP, 'localtime')) WHERE id = ?1";
const INSERT_EXERCISE: &str = "INSERT INTO exercises (workout_id, name, reps, sets, weight) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_EXERCISES: &str = "SELECT id, name, reps, sets, weight FROM exercises WHERE workout_id = ?1 ORDER BY id";
const SELECT_COMPLETED_WORKOUTS: &str = "SELECT id, started_at, completed_at FROM workouts WHERE completed_at IS NOT NULL ORDER BY completed_at DESC";
const DELETE_ALL_EXERCISES: &str = "DELETE FROM exercises";
const DELETE_ALL_WORKOUTS: &str = "DELETE FROM workouts";
const COUNT_EXERCISES: &str = "SELECT COUNT(*) FROM exercises WHERE workout_id = ?1";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store for workout sessions.
///
/// The connection is shared behind a mutex so the store can be handed to
/// concurrent tasks, although the CLI itself drives it sequentially.
pub struct Workouts {
    pub conn: Arc<Mutex<Connection>>,
}

impl Workouts {
    /// Opens the database and ensures the workout schema exists.
    pub fn new() -> Result<Workouts> {
        let db_conn = Db::new()?.conn;
        db_conn.execute_batch(SCHEMA_WORKOUTS)?;

        Ok(Workouts {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    /// Stages an exercise into the open workout, creating the workout first
    /// when none is in progress. Returns the id of the open workout.
    pub fn add_exercise(&self, exercise: &Exercise) -> Result<i64> {
        let conn_guard = self.conn.lock();

        let workout_id = match Self::open_workout_id(&conn_guard)? {
            Some(id) => id,
            None => {
                conn_guard.execute(INSERT_WORKOUT, [])?;
                conn_guard.last_insert_rowid()
            }
        };

        conn_guard.execute(
            INSERT_EXERCISE,
            params![workout_id, exercise.name, exercise.reps, exercise.sets, exercise.weight],
        )?;

        Ok(workout_id)
    }

    /// The workout currently being assembled, with its staged exercises.
    pub fn current(&self) -> Result<Option<Workout>> {
        let conn_guard = self.conn.lock();

        let mut stmt = conn_guard.prepare(SELECT_OPEN_WORKOUT)?;
        let row = stmt.query_row([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)));
        let Ok((id, started_str)) = row else {
            return Ok(None);
        };

        let exercises = Self::exercises_for(&conn_guard, id)?;
        Ok(Some(Workout {
            id,
            started_at: NaiveDateTime::parse_from_str(&started_str, TIMESTAMP_FORMAT)?,
            completed_at: None,
            exercises,
        }))
    }

    /// Completes the open workout. Returns the number of exercises it
    /// contained, or `None` when no workout was in progress or the open
    /// workout was still empty.
    pub fn complete_current(&self) -> Result<Option<usize>> {
        let conn_guard = self.conn.lock();

        let Some(id) = Self::open_workout_id(&conn_guard)? else {
            return Ok(None);
        };
        let count: i64 = conn_guard.query_row(COUNT_EXERCISES, params![id], |row| row.get(0))?;
        if count == 0 {
            return Ok(None);
        }

        conn_guard.execute(COMPLETE_WORKOUT, params![id])?;
        Ok(Some(count as usize))
    }

    /// All completed workouts, most recently completed first.
    pub fn fetch_completed(&self) -> Result<Vec<Workout>> {
        let conn_guard = self.conn.lock();

        let mut stmt = conn_guard.prepare(SELECT_COMPLETED_WORKOUTS)?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, Option<String>>(2)?))
        })?;

        let mut workouts = Vec::new();
        for row in rows {
            let (id, started_str, completed_str) = row?;
            let exercises = Self::exercises_for(&conn_guard, id)?;
            workouts.push(Workout {
                id,
                started_at: NaiveDateTime::parse_from_str(&started_str, TIMESTAMP_FORMAT)?,
                completed_at: completed_str
                    .map(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT))
                    .transpose()?,
                exercises,
            });
        }

        Ok(workouts)
    }

    /// Deletes every workout and exercise. Returns the number of workouts
    /// removed.
    pub fn clear(&self) -> Result<usize> {
        let conn_guard = self.conn.lock();
        conn_guard.execute(DELETE_ALL_EXERCISES, [])?;
        let deleted = conn_guard.execute(DELETE_ALL_WORKOUTS, [])?;
        Ok(deleted)
    }

    fn open_workout_id(conn: &Connection) -> Result<Option<i64>> {
        let mut stmt = conn.prepare(SELECT_OPEN_WORKOUT)?;
        let row = stmt.query_row([], |row| row.get::<_, i64>(0));
        match row {
            Ok(id) => Ok(Some(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn exercises_for(conn: &Connection, workout_id: i64) -> Result<Vec<Exercise>> {
        let mut stmt = conn.prepare(SELECT_EXERCISES)?;
        let rows = stmt.query_map(params![workout_id], |row| {
            Ok(Exercise {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                reps: row.get(2)?,
                sets: row.get(3)?,
                weight: row.get(4)?,
            })
        })?;

        let mut exercises = Vec::new();
        for exercise in rows {
            exercises.push(exercise?);
        }
        Ok(exercises)
    }
}
