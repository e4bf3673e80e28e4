//! Contains the SQLite backed implementations of the store traits, plus a
//! convenience function for creating both stores over a shared connection.

mod transaction;
mod user;

pub use transaction::SqliteTransactionStore;
pub use user::SqliteUserStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// Creates the user and transaction stores over a shared `db_connection`.
///
/// This function will modify the database by adding the tables for the domain
/// models if they do not already exist.
///
/// # Errors
///
/// Returns an [Error::SqlError] if the tables could not be created.
pub fn create_stores(
    db_connection: Connection,
) -> Result<(SqliteUserStore, SqliteTransactionStore), Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok((
        SqliteUserStore::new(connection.clone()),
        SqliteTransactionStore::new(connection),
    ))
}
