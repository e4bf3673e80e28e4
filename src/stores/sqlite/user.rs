//! Implements a SQLite backed user store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{PasswordHash, User, UserID},
    stores::UserStore,
};

/// Handles the creation and retrieval of [User] records in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteUserStore {
    /// Create a new user store.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SqliteUserStore {
    /// Create and insert a new user into the database.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateUsername] if `username` is already taken, or
    /// [Error::SqlError] if an SQL related error occurred.
    fn create(&mut self, username: &str, password_hash: PasswordHash) -> Result<User, Error> {
        let connection = self.connection.lock().unwrap();
        let created_at = OffsetDateTime::now_utc();

        connection
            .execute(
                "INSERT INTO user (username, password, created_at) VALUES (?1, ?2, ?3)",
                (username, password_hash.to_string(), created_at),
            )
            .map_err(|error| match error {
                // Code 2067 occurs when a UNIQUE constraint failed.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 2067 => {
                    Error::DuplicateUsername(username.to_string())
                }
                error => error.into(),
            })?;

        let id = UserID::new(connection.last_insert_rowid());

        Ok(User::new(
            id,
            username.to_string(),
            password_hash,
            created_at,
        ))
    }

    /// Get the user from the database that has the specified `id`.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if there is no user with the specified
    /// ID, or [Error::SqlError] if there are SQL related errors.
    fn get(&self, id: UserID) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, username, password, created_at FROM user WHERE id = :id")?
            .query_row(&[(":id", &id.as_i64())], Self::map_row)
            .map_err(|e| e.into())
    }

    /// Get the user from the database that has the specified `username`.
    ///
    /// The lookup is case-sensitive.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if there is no user with the specified
    /// username, or [Error::SqlError] if there are SQL related errors.
    fn get_by_username(&self, username: &str) -> Result<User, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, username, password, created_at FROM user WHERE username = :username",
            )?
            .query_row(&[(":username", &username)], Self::map_row)
            .map_err(|e| e.into())
    }

    /// Replace the password hash of the user with the given username.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if there is no user with the specified
    /// username, or [Error::SqlError] if there are SQL related errors.
    fn update_password_hash(
        &mut self,
        username: &str,
        password_hash: PasswordHash,
    ) -> Result<(), Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "UPDATE user SET password = ?1 WHERE username = ?2",
            (password_hash.to_string(), username),
        )?;

        if rows_affected == 0 {
            return Err(Error::UserNotFound);
        }

        Ok(())
    }
}

impl CreateTable for SqliteUserStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS user (
                    id INTEGER PRIMARY KEY,
                    username TEXT UNIQUE NOT NULL,
                    password TEXT NOT NULL,
                    created_at TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SqliteUserStore {
    type ReturnType = User;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let raw_id = row.get(offset)?;
        let username: String = row.get(offset + 1)?;
        let raw_password_hash: String = row.get(offset + 2)?;
        let created_at: OffsetDateTime = row.get(offset + 3)?;

        let id = UserID::new(raw_id);
        let password_hash = PasswordHash::new_unchecked(&raw_password_hash);

        Ok(User::new(id, username, password_hash, created_at))
    }
}
