//! Defines the transaction store trait and its query type.

use std::ops::RangeInclusive;

use time::Date;

use crate::{
    Error,
    models::{Currency, DatabaseID, Room, Transaction, TransactionBuilder},
};

/// Handles the creation, retrieval, and deletion of transactions.
///
/// Every operation is scoped to a username that the caller has already
/// authenticated. Implementers must guarantee that an operation scoped to one
/// user can never read or mutate another user's transactions.
pub trait TransactionStore {
    /// Create a new transaction in the given user's ledger.
    ///
    /// The stored transaction, including its assigned ID, is returned.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if `username` does not refer to a
    /// registered user.
    fn create(&mut self, username: &str, builder: TransactionBuilder)
    -> Result<Transaction, Error>;

    /// Retrieve transactions from the given user's ledger, in insertion order.
    ///
    /// This is a pure read: calling it twice without an intervening mutation
    /// returns identical results. An empty vector is returned if no
    /// transaction matches `query`.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if `username` does not refer to a
    /// registered user.
    fn get_query(&self, username: &str, query: TransactionQuery)
    -> Result<Vec<Transaction>, Error>;

    /// Permanently remove a transaction from the given user's ledger.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if `id` does not refer to a
    /// transaction owned by `username`; the ledger is unchanged in that case.
    fn delete(&mut self, username: &str, id: DatabaseID) -> Result<(), Error>;

    /// Permanently remove every transaction in the given user's ledger.
    ///
    /// Other users' ledgers are unaffected. Resetting an already empty ledger
    /// succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if `username` does not refer to a
    /// registered user.
    fn delete_all(&mut self, username: &str) -> Result<(), Error>;

    /// The rooms that should appear in the given user's reports: every room
    /// used by one of their transactions plus the default set, sorted by
    /// label.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if `username` does not refer to a
    /// registered user.
    fn known_rooms(&self, username: &str) -> Result<Vec<Room>, Error>;
}

/// Defines which transactions should be fetched from
/// [TransactionStore::get_query].
///
/// The default query selects a user's entire ledger.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Include only transactions with this category.
    pub category: Option<String>,
    /// Include only transactions in this room.
    pub room: Option<Room>,
    /// Include only transactions denominated in this currency.
    pub currency: Option<Currency>,
    /// Include only transactions dated within this range (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
}
