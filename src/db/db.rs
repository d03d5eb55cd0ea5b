use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "liftlog.db";

/// Central database connection manager. Each store module opens its own
/// connection through this wrapper and initializes its own schema.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Db { conn })
    }
}
