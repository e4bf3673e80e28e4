//! Summary and grouping calculations over transaction snapshots.
//!
//! Everything in this module is a pure function of the transactions passed
//! in: nothing is persisted or cached, so a summary can never go stale across
//! a mutation. Aggregation never relies on the order of the input, and maps
//! are returned as `BTreeMap`s so that reports iterate deterministically.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Currency, Room, Transaction};

/// Income and expense totals for one grouping bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateTotals {
    /// Sum of the income amounts in this bucket.
    pub income: Decimal,
    /// Sum of the expense amounts in this bucket.
    pub expense: Decimal,
}

impl AggregateTotals {
    fn add(&mut self, transaction: &Transaction) {
        if transaction.is_income() {
            self.income += transaction.amount();
        } else {
            self.expense += transaction.amount();
        }
    }

    /// Income minus expense for this bucket.
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// A financial summary computed from a snapshot of a user's ledger.
///
/// The top level totals sum over the whole snapshot regardless of currency,
/// so callers that care about exact cross-currency arithmetic should either
/// filter the snapshot to one currency first or read `by_currency`, which
/// keeps each currency strictly separate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of all income amounts.
    pub total_income: Decimal,
    /// Sum of all expense amounts.
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub balance: Decimal,
    /// `(total_income - total_expense) / total_income`, or zero when there is
    /// no income. Negative when more was spent than earned.
    pub savings_rate: Decimal,
    /// Totals for every distinct category in the snapshot.
    pub by_category: BTreeMap<String, AggregateTotals>,
    /// Totals for every room in the snapshot.
    pub by_room: BTreeMap<String, AggregateTotals>,
    /// Totals per currency. Never summed across currencies.
    pub by_currency: BTreeMap<Currency, AggregateTotals>,
}

/// Compute a [Summary] from a snapshot of transactions.
///
/// A single pass over the input. An empty snapshot produces a zeroed summary
/// with a savings rate of zero, not an error.
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut by_category: BTreeMap<String, AggregateTotals> = BTreeMap::new();
    let mut by_room: BTreeMap<String, AggregateTotals> = BTreeMap::new();
    let mut by_currency: BTreeMap<Currency, AggregateTotals> = BTreeMap::new();

    for transaction in transactions {
        if transaction.is_income() {
            total_income += transaction.amount();
        } else {
            total_expense += transaction.amount();
        }

        by_category
            .entry(transaction.category().to_string())
            .or_default()
            .add(transaction);
        by_room
            .entry(transaction.room().label().to_string())
            .or_default()
            .add(transaction);
        by_currency
            .entry(transaction.currency())
            .or_default()
            .add(transaction);
    }

    let balance = total_income - total_expense;
    let savings_rate = if total_income > Decimal::ZERO {
        balance / total_income
    } else {
        Decimal::ZERO
    };

    Summary {
        total_income,
        total_expense,
        balance,
        savings_rate,
        by_category,
        by_room,
        by_currency,
    }
}

/// Group transactions by category, with totals for every distinct category
/// present in the snapshot.
pub fn group_by_category(transactions: &[Transaction]) -> BTreeMap<String, AggregateTotals> {
    let mut totals: BTreeMap<String, AggregateTotals> = BTreeMap::new();

    for transaction in transactions {
        totals
            .entry(transaction.category().to_string())
            .or_default()
            .add(transaction);
    }

    totals
}

/// Group transactions by room.
///
/// The result is seeded with zero totals for every room in `known_rooms`, so
/// reports enumerate all of a user's rooms even when a room has no activity
/// in the current snapshot. Rooms used by the snapshot but missing from
/// `known_rooms` still appear.
pub fn group_by_room(
    transactions: &[Transaction],
    known_rooms: &[Room],
) -> BTreeMap<String, AggregateTotals> {
    let mut totals: BTreeMap<String, AggregateTotals> = known_rooms
        .iter()
        .map(|room| (room.label().to_string(), AggregateTotals::default()))
        .collect();

    for transaction in transactions {
        totals
            .entry(transaction.room().label().to_string())
            .or_default()
            .add(transaction);
    }

    totals
}

/// Group transactions by currency. Totals for different currencies are kept
/// strictly separate, there is no conversion.
pub fn group_by_currency(transactions: &[Transaction]) -> BTreeMap<Currency, AggregateTotals> {
    let mut totals: BTreeMap<Currency, AggregateTotals> = BTreeMap::new();

    for transaction in transactions {
        totals
            .entry(transaction.currency())
            .or_default()
            .add(transaction);
    }

    totals
}

#[cfg(test)]
mod analytics_tests {
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::models::{Currency, Room, Transaction, UserID};

    use super::{compute_summary, group_by_category, group_by_currency, group_by_room};

    fn transaction(
        id: i64,
        amount: &str,
        category: &str,
        currency: Currency,
        room: &str,
        is_income: bool,
    ) -> Transaction {
        Transaction::new(
            id,
            amount.parse().unwrap(),
            String::new(),
            category.to_string(),
            currency,
            Room::parse(room),
            is_income,
            date!(2026 - 08 - 01),
            UserID::new(1),
        )
    }

    fn decimal(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn empty_snapshot_produces_zeroed_summary() {
        let summary = compute_summary(&[]);

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
        assert_eq!(summary.savings_rate, Decimal::ZERO);
        assert!(summary.by_category.is_empty());
        assert!(summary.by_room.is_empty());
        assert!(summary.by_currency.is_empty());
    }

    #[test]
    fn summary_computes_balance_and_savings_rate() {
        // Salary of 1000 in the General room, groceries of 200 in Food.
        let transactions = vec![
            transaction(1, "1000", "Salary", Currency::Usd, "General", true),
            transaction(2, "200", "Groceries", Currency::Usd, "Food", false),
        ];

        let summary = compute_summary(&transactions);

        assert_eq!(summary.total_income, decimal("1000"));
        assert_eq!(summary.total_expense, decimal("200"));
        assert_eq!(summary.balance, decimal("800"));
        assert_eq!(summary.savings_rate, decimal("0.8"));
    }

    #[test]
    fn savings_rate_is_zero_without_income() {
        let transactions = vec![transaction(
            1,
            "50",
            "Groceries",
            Currency::Usd,
            "Food",
            false,
        )];

        let summary = compute_summary(&transactions);

        assert_eq!(summary.savings_rate, Decimal::ZERO);
        assert_eq!(summary.balance, decimal("-50"));
    }

    #[test]
    fn savings_rate_is_negative_when_spending_exceeds_income() {
        let transactions = vec![
            transaction(1, "100", "Salary", Currency::Usd, "Personal", true),
            transaction(2, "150", "Rent", Currency::Usd, "Personal", false),
        ];

        let summary = compute_summary(&transactions);

        assert_eq!(summary.savings_rate, decimal("-0.5"));
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut transactions = vec![
            transaction(1, "1000", "Salary", Currency::Usd, "General", true),
            transaction(2, "200", "Groceries", Currency::Usd, "Food", false),
            transaction(3, "75.50", "Transport", Currency::Inr, "Food", false),
        ];

        let forwards = compute_summary(&transactions);
        transactions.reverse();
        let backwards = compute_summary(&transactions);

        assert_eq!(forwards, backwards);
    }

    #[test]
    fn currencies_are_never_summed_together() {
        let transactions = vec![
            transaction(1, "50", "Food", Currency::Inr, "Personal", false),
            transaction(2, "50", "Food", Currency::Usd, "Personal", false),
        ];

        let by_currency = group_by_currency(&transactions);

        assert_eq!(by_currency.len(), 2);
        assert_eq!(by_currency[&Currency::Inr].expense, decimal("50"));
        assert_eq!(by_currency[&Currency::Usd].expense, decimal("50"));
    }

    #[test]
    fn group_by_category_covers_every_distinct_category() {
        let transactions = vec![
            transaction(1, "1000", "Salary", Currency::Usd, "Personal", true),
            transaction(2, "200", "Food", Currency::Usd, "Personal", false),
            transaction(3, "100", "Food", Currency::Usd, "Personal", false),
        ];

        let by_category = group_by_category(&transactions);

        assert_eq!(
            by_category.keys().collect::<Vec<_>>(),
            vec!["Food", "Salary"]
        );
        assert_eq!(by_category["Food"].expense, decimal("300"));
        assert_eq!(by_category["Salary"].income, decimal("1000"));
        assert_eq!(by_category["Salary"].net(), decimal("1000"));
    }

    #[test]
    fn group_by_room_reports_zero_activity_rooms() {
        let transactions = vec![transaction(
            1,
            "10",
            "Food",
            Currency::Usd,
            "Kitchen",
            false,
        )];

        let by_room = group_by_room(&transactions, &[Room::Personal, Room::parse("Kitchen")]);

        assert_eq!(by_room.len(), 2);
        assert_eq!(by_room["Personal"].expense, Decimal::ZERO);
        assert_eq!(by_room["Kitchen"].expense, decimal("10"));
    }

    #[test]
    fn exact_decimal_arithmetic_has_no_float_drift() {
        // 0.1 + 0.2 is exactly 0.3 in decimal arithmetic.
        let transactions = vec![
            transaction(1, "0.1", "Misc", Currency::Usd, "Personal", false),
            transaction(2, "0.2", "Misc", Currency::Usd, "Personal", false),
        ];

        let summary = compute_summary(&transactions);

        assert_eq!(summary.total_expense, decimal("0.3"));
    }
}
