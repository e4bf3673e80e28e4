//! Defines the crate level error type and the conversion from SQLite errors.

/// The errors that may occur while operating on the ledger.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The username used to create a user is already taken. The client should
    /// try again with a different username.
    #[error("the username \"{0}\" is already in use")]
    DuplicateUsername(String),

    /// There was no user that matched the given details.
    #[error("no user found with the given details")]
    UserNotFound,

    /// The username and password combination did not match a registered user.
    ///
    /// This variant covers both an unknown username and a wrong password so
    /// that callers cannot tell which part was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The user provided a password that is too easy to guess.
    #[error("password is too weak: {0}")]
    TooWeak(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The amount used to create a transaction was not a non-negative decimal.
    #[error("\"{0}\" is not a valid amount, expected a non-negative decimal")]
    InvalidAmount(String),

    /// The currency code used to create a transaction is not supported.
    #[error("\"{0}\" is not a supported currency code")]
    InvalidCurrency(String),

    /// Tried to delete or look up a transaction that does not exist for the
    /// given user.
    #[error("the transaction could not be found")]
    TransactionNotFound,

    /// An unhandled/unexpected SQL error. This is the surface for durable
    /// reads and writes that could not complete.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::UserNotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::Error;

    #[test]
    fn no_rows_maps_to_user_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::UserNotFound);
    }
}
