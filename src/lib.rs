//! Pocketbook is the transaction ledger and analytics core of a personal
//! finance tracker.
//!
//! Users record income and expense transactions, tagged by category, currency,
//! and room, and view aggregated summaries (balance, savings rate, category
//! and room breakdowns). This library owns the per-user transaction records,
//! enforces data isolation between users, and computes financial summaries.
//! The web layer, templating, chart rendering, and session mechanics live
//! elsewhere: callers hand every operation an already-authenticated username.
//!
//! The main entry points are [stores::sqlite::create_stores] to open the
//! stores over one SQLite database, the [stores::UserStore] and
//! [stores::TransactionStore] traits, and the pure functions in [analytics].

#![warn(missing_docs)]

pub mod analytics;
pub mod auth;
pub mod db;
mod error;
pub mod models;
pub mod stores;

pub use error::Error;
