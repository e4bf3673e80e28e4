//! Defines a user of the application and its supporting types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::PasswordHash;

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from other row IDs, leading to better
/// compile time errors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserID(i64);

impl UserID {
    /// Wrap a raw row ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The underlying row ID.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application.
///
/// Each user owns an isolated set of transactions, resolved through their ID.
/// Usernames are unique, case-sensitive, and immutable once created; the only
/// mutation a user record supports is credential rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserID,
    username: String,
    password_hash: PasswordHash,
    created_at: OffsetDateTime,
}

impl User {
    /// Create a user from its parts.
    ///
    /// This does not insert the user into a store, see
    /// [UserStore::create](crate::stores::UserStore::create) for that.
    pub fn new(
        id: UserID,
        username: String,
        password_hash: PasswordHash,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at,
        }
    }

    /// The user's ID in the database.
    pub fn id(&self) -> UserID {
        self.id
    }

    /// The unique name the user signed up with.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The user's password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// When the user account was created.
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}

#[cfg(test)]
mod user_tests {
    use time::OffsetDateTime;

    use crate::models::PasswordHash;

    use super::{User, UserID};

    #[test]
    fn accessors_return_the_constructed_values() {
        let created_at = OffsetDateTime::now_utc();
        let user = User::new(
            UserID::new(1),
            "alice".to_string(),
            PasswordHash::new_unchecked("hunter2"),
            created_at,
        );

        assert_eq!(user.id(), UserID::new(1));
        assert_eq!(user.username(), "alice");
        assert_eq!(user.password_hash(), &PasswordHash::new_unchecked("hunter2"));
        assert_eq!(user.created_at(), created_at);
    }
}
