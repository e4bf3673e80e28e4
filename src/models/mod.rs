//! Defines the domain models of the application.

mod currency;
mod password;
mod room;
mod transaction;
mod user;

pub use currency::Currency;
pub use password::{PasswordHash, ValidatedPassword};
pub use room::{DEFAULT_ROOMS, Room};
pub use transaction::{Transaction, TransactionBuilder};
pub use user::{User, UserID};

/// An alias for integer row IDs in the application's database.
pub type DatabaseID = i64;
