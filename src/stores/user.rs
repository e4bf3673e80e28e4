//! Defines the user store trait.

use crate::{
    Error,
    models::{PasswordHash, User, UserID},
};

/// Handles the creation and retrieval of [User] records.
pub trait UserStore {
    /// Create a new user.
    ///
    /// Implementers must persist the user before returning and must never
    /// retain the plaintext password, only `password_hash`.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateUsername] if `username` is already taken.
    fn create(&mut self, username: &str, password_hash: PasswordHash) -> Result<User, Error>;

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if no user with the given ID exists.
    fn get(&self, id: UserID) -> Result<User, Error>;

    /// Get a user by their username. Usernames are case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if no user with the given username exists.
    fn get_by_username(&self, username: &str) -> Result<User, Error>;

    /// Replace the password hash of the user with the given username.
    ///
    /// This is the only mutation a user record supports.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if no user with the given username exists.
    fn update_password_hash(
        &mut self,
        username: &str,
        password_hash: PasswordHash,
    ) -> Result<(), Error>;
}
