//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, params_from_iter, types::Type};
use rust_decimal::Decimal;
use time::Date;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Currency, DEFAULT_ROOMS, DatabaseID, Room, Transaction, TransactionBuilder, UserID},
    stores::{TransactionQuery, TransactionStore},
};

/// Stores transactions in a SQLite database.
///
/// Every operation is scoped by the owning user's row ID, so one user's
/// ledger is never visible through another user's operations. Note that
/// because a transaction depends on the [User](crate::models::User) model,
/// the user table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Resolve a username to the row ID that scopes that user's ledger.
    fn resolve_user(connection: &Connection, username: &str) -> Result<UserID, Error> {
        let id: i64 = connection
            .prepare("SELECT id FROM user WHERE username = :username")?
            .query_row(&[(":username", &username)], |row| row.get(0))?;

        Ok(UserID::new(id))
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Create a new transaction in the given user's ledger.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::UserNotFound] if `username` does not refer to a registered
    ///   user,
    /// - [Error::SqlError] if there is some other SQL error.
    fn create(
        &mut self,
        username: &str,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();
        let user_id = Self::resolve_user(&connection, username)?;

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" \
                 (amount, description, category, currency, room, is_income, date, user_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
                 RETURNING id, amount, description, category, currency, room, is_income, date, \
                 user_id",
            )?
            .query_row(
                (
                    builder.amount.to_string(),
                    builder.description,
                    builder.category,
                    builder.currency.to_string(),
                    builder.room.label(),
                    builder.is_income,
                    builder.date,
                    user_id.as_i64(),
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve transactions from the given user's ledger, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::UserNotFound] if `username` does not refer to a registered
    ///   user,
    /// - [Error::SqlError] if there is some other SQL error.
    fn get_query(
        &self,
        username: &str,
        query: TransactionQuery,
    ) -> Result<Vec<Transaction>, Error> {
        let connection = self.connection.lock().unwrap();
        let user_id = Self::resolve_user(&connection, username)?;

        let mut sql = String::from(
            "SELECT id, amount, description, category, currency, room, is_income, date, user_id \
             FROM \"transaction\" WHERE user_id = ?",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(user_id.as_i64())];

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            params.push(Box::new(category));
        }
        if let Some(room) = query.room {
            sql.push_str(" AND room = ?");
            params.push(Box::new(room.label().to_string()));
        }
        if let Some(currency) = query.currency {
            sql.push_str(" AND currency = ?");
            params.push(Box::new(currency.to_string()));
        }
        if let Some(date_range) = query.date_range {
            sql.push_str(" AND date >= ? AND date <= ?");
            params.push(Box::new(*date_range.start()));
            params.push(Box::new(*date_range.end()));
        }

        sql.push_str(" ORDER BY id ASC");

        connection
            .prepare(&sql)?
            .query_map(params_from_iter(params), Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
            .collect()
    }

    /// Permanently remove a transaction from the given user's ledger.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::UserNotFound] if `username` does not refer to a registered
    ///   user,
    /// - [Error::TransactionNotFound] if `id` does not refer to a transaction
    ///   owned by `username`,
    /// - [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, username: &str, id: DatabaseID) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();
        let user_id = Self::resolve_user(&connection, username)?;

        let rows_affected = connection.execute(
            "DELETE FROM \"transaction\" WHERE id = ?1 AND user_id = ?2",
            (id, user_id.as_i64()),
        )?;

        if rows_affected == 0 {
            return Err(Error::TransactionNotFound);
        }

        Ok(())
    }

    /// Permanently remove every transaction in the given user's ledger.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::UserNotFound] if `username` does not refer to a registered
    ///   user,
    /// - [Error::SqlError] if there is some other SQL error.
    fn delete_all(&mut self, username: &str) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();
        let user_id = Self::resolve_user(&connection, username)?;

        connection.execute(
            "DELETE FROM \"transaction\" WHERE user_id = ?1",
            (user_id.as_i64(),),
        )?;

        Ok(())
    }

    /// The rooms that should appear in the given user's reports.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or
    /// is poisoned.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::UserNotFound] if `username` does not refer to a registered
    ///   user,
    /// - [Error::SqlError] if there is some other SQL error.
    fn known_rooms(&self, username: &str) -> Result<Vec<Room>, Error> {
        let connection = self.connection.lock().unwrap();
        let user_id = Self::resolve_user(&connection, username)?;

        let mut rooms: Vec<Room> = connection
            .prepare("SELECT DISTINCT room FROM \"transaction\" WHERE user_id = :user_id")?
            .query_map(&[(":user_id", &user_id.as_i64())], |row| {
                row.get::<_, String>(0)
            })?
            .map(|maybe_label| {
                maybe_label
                    .map(|label| Room::parse(&label))
                    .map_err(Error::from)
            })
            .collect::<Result<_, _>>()?;

        rooms.extend(DEFAULT_ROOMS);
        rooms.sort_by(|left, right| left.label().cmp(right.label()));
        rooms.dedup();

        Ok(rooms)
    }
}

impl CreateTable for SqliteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id INTEGER PRIMARY KEY,
                    amount TEXT NOT NULL,
                    description TEXT NOT NULL,
                    category TEXT NOT NULL,
                    currency TEXT NOT NULL,
                    room TEXT NOT NULL,
                    is_income INTEGER NOT NULL,
                    date TEXT NOT NULL,
                    user_id INTEGER NOT NULL,
                    FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SqliteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id: DatabaseID = row.get(offset)?;

        let raw_amount: String = row.get(offset + 1)?;
        let amount: Decimal = raw_amount.parse().map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(offset + 1, Type::Text, Box::new(error))
        })?;

        let description: String = row.get(offset + 2)?;
        let category: String = row.get(offset + 3)?;

        let raw_currency: String = row.get(offset + 4)?;
        let currency: Currency = raw_currency.parse().map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(offset + 4, Type::Text, Box::new(error))
        })?;

        let raw_room: String = row.get(offset + 5)?;
        let room = Room::parse(&raw_room);

        let is_income: bool = row.get(offset + 6)?;
        let date: Date = row.get(offset + 7)?;
        let user_id = UserID::new(row.get(offset + 8)?);

        Ok(Transaction::new(
            id,
            amount,
            description,
            category,
            currency,
            room,
            is_income,
            date,
            user_id,
        ))
    }
}
