//! Service layer for the expense tracker
//!
//! Validation of raw input, the ledger that keeps expenses and balances in
//! step, and the session type presentation layers call into.

pub mod ledger;
pub mod tracker;
pub mod validation;

pub use ledger::{ExpenseLedger, MonthlyTotals};
pub use tracker::ExpenseTracker;
