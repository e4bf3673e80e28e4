//! Credential verification against a user store.
//!
//! The ledger itself never authenticates requests, it trusts the username
//! handed to it. This module serves the excluded login layer, which exchanges
//! a username and password for a verified [User].

use crate::{Error, models::User, stores::UserStore};

/// Check a username and password against the stored credentials.
///
/// The comparison is done by the hashing library against the stored one-way
/// hash, the plaintext is never compared directly or retained.
///
/// # Errors
///
/// Returns [Error::InvalidCredentials] if the username is unknown or the
/// password does not match. The two cases are deliberately indistinguishable
/// so that a caller cannot probe which usernames are registered.
pub fn verify_credentials<S: UserStore>(
    store: &S,
    username: &str,
    password: &str,
) -> Result<User, Error> {
    let user = store.get_by_username(username).map_err(|error| match error {
        Error::UserNotFound => Error::InvalidCredentials,
        error => error,
    })?;

    match user.password_hash().verify(password)? {
        true => Ok(user),
        false => Err(Error::InvalidCredentials),
    }
}

#[cfg(test)]
mod auth_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        models::PasswordHash,
        stores::{UserStore, sqlite::SqliteUserStore},
    };

    use super::verify_credentials;

    fn get_store_with_user(username: &str, password: &str) -> SqliteUserStore {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        let mut store = SqliteUserStore::new(Arc::new(Mutex::new(conn)));
        let password_hash = PasswordHash::from_raw_password(password, 4).unwrap();
        store.create(username, password_hash).unwrap();

        store
    }

    #[test]
    fn verify_succeeds_with_correct_credentials() {
        let store = get_store_with_user("alice", "blue-tangerine-88-trampoline");

        let user = verify_credentials(&store, "alice", "blue-tangerine-88-trampoline").unwrap();

        assert_eq!(user.username(), "alice");
    }

    #[test]
    fn verify_fails_with_wrong_password() {
        let store = get_store_with_user("alice", "blue-tangerine-88-trampoline");

        assert_eq!(
            verify_credentials(&store, "alice", "thewrongpassword"),
            Err(Error::InvalidCredentials)
        );
    }

    #[test]
    fn unknown_user_is_indistinguishable_from_wrong_password() {
        let store = get_store_with_user("alice", "blue-tangerine-88-trampoline");

        assert_eq!(
            verify_credentials(&store, "mallory", "blue-tangerine-88-trampoline"),
            Err(Error::InvalidCredentials)
        );
    }
}
