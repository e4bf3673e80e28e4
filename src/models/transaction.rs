//! Defines the type `Transaction`, the core type of the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    models::{Currency, DatabaseID, Room, UserID},
};

/// An income or expense, i.e. an event where money was either earned or spent.
///
/// The amount is always non-negative, the direction of the transaction is
/// carried by the `is_income` flag. To create a new transaction, use
/// [TransactionBuilder] and a
/// [TransactionStore](crate::stores::TransactionStore). Transactions are
/// read-only once created, except for an explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: DatabaseID,
    amount: Decimal,
    description: String,
    category: String,
    currency: Currency,
    room: Room,
    is_income: bool,
    date: Date,
    user_id: UserID,
}

impl Transaction {
    /// Create a transaction from its parts.
    ///
    /// Only stores construct transactions directly, everything else goes
    /// through [TransactionBuilder] and
    /// [TransactionStore::create](crate::stores::TransactionStore::create),
    /// which validate the amount up front.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `amount` is negative.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: DatabaseID,
        amount: Decimal,
        description: String,
        category: String,
        currency: Currency,
        room: Room,
        is_income: bool,
        date: Date,
        user_id: UserID,
    ) -> Self {
        debug_assert!(!amount.is_sign_negative());

        Self {
            id,
            amount,
            description,
            category,
            currency,
            room,
            is_income,
            date,
            user_id,
        }
    }

    /// The ID of the transaction, unique within the owning user's ledger.
    pub fn id(&self) -> DatabaseID {
        self.id
    }

    /// The amount of money earned or spent. Always non-negative.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// A text description of what the transaction was for. May be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// A free text label that describes the type of the transaction.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The currency the amount is denominated in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The room the transaction is organized into.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Whether this transaction is income (`true`) or an expense (`false`).
    pub fn is_income(&self) -> bool {
        self.is_income
    }

    /// The date the transaction was recorded on.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The ID of the user that owns this transaction.
    pub fn user_id(&self) -> UserID {
        self.user_id
    }
}

/// Builder for creating a new [Transaction].
///
/// Validation happens up front: the amount is parsed when the builder is
/// created, so an invalid amount never reaches a store. Finalize the builder
/// by passing it to [TransactionStore::create](crate::stores::TransactionStore::create).
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    pub(crate) amount: Decimal,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) currency: Currency,
    pub(crate) room: Room,
    pub(crate) is_income: bool,
    pub(crate) date: Date,
}

impl TransactionBuilder {
    /// Start building a transaction for the given raw amount.
    ///
    /// The transaction defaults to an expense in USD, dated today, in the
    /// default room, with an empty description and category.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `amount` is not a decimal number or
    /// is negative.
    pub fn new(amount: &str) -> Result<Self, Error> {
        let amount: Decimal = amount
            .trim()
            .parse()
            .map_err(|_| Error::InvalidAmount(amount.to_string()))?;

        if amount.is_sign_negative() {
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        Ok(Self {
            amount,
            description: String::new(),
            category: String::new(),
            currency: Currency::Usd,
            room: Room::Personal,
            is_income: false,
            date: OffsetDateTime::now_utc().date(),
        })
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.trim().to_string();
        self
    }

    /// Set the currency for the transaction.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the room for the transaction.
    pub fn room(mut self, room: Room) -> Self {
        self.room = room;
        self
    }

    /// Mark the transaction as income rather than an expense.
    pub fn income(mut self, is_income: bool) -> Self {
        self.is_income = is_income;
        self
    }

    /// Set the date for the transaction. Defaults to today.
    pub fn date(mut self, date: Date) -> Self {
        self.date = date;
        self
    }
}


#[cfg(test)]
mod transaction_builder_tests {
    use rust_decimal::Decimal;

    use crate::{
        Error,
        models::{Currency, Room},
    };

    use super::TransactionBuilder;

    #[test]
    fn new_parses_a_decimal_amount() {
        let builder = TransactionBuilder::new("19.99").unwrap();

        assert_eq!(builder.amount, "19.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn new_fails_on_negative_amount() {
        assert_eq!(
            TransactionBuilder::new("-5"),
            Err(Error::InvalidAmount("-5".to_string()))
        );
    }

    #[test]
    fn new_fails_on_non_numeric_amount() {
        assert_eq!(
            TransactionBuilder::new("ten dollars"),
            Err(Error::InvalidAmount("ten dollars".to_string()))
        );
    }

    #[test]
    fn new_accepts_zero() {
        assert!(TransactionBuilder::new("0").is_ok());
    }

    #[test]
    fn setters_trim_free_text() {
        let builder = TransactionBuilder::new("1")
            .unwrap()
            .description("  weekly shop ")
            .category(" Groceries ");

        assert_eq!(builder.description, "weekly shop");
        assert_eq!(builder.category, "Groceries");
    }

    #[test]
    fn builder_defaults_are_an_expense_in_the_default_room() {
        let builder = TransactionBuilder::new("1").unwrap();

        assert!(!builder.is_income);
        assert_eq!(builder.currency, Currency::Usd);
        assert_eq!(builder.room, Room::Personal);
    }
}
