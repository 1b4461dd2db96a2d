//! Expense Tracker - salary-based monthly expense tracking
//!
//! A user confirms a name, role and monthly salary, then records expenses
//! against individual months. Every month starts with the full salary
//! available; each expense is debited from its month and rejected when it
//! would exceed what is left. Year summaries group the recorded expenses by
//! month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, months and month-name tables, accounts and expenses
//! - `services`: Input validation, the expense ledger and the session boundary
//! - `reports`: The per-month year summary
//! - `display`: Terminal tables
//! - `export`: CSV, JSON and YAML renderings of a summary
//! - `cli`: The interactive shell and script runner
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use expense_tracker::models::Locale;
//! use expense_tracker::services::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::new(Locale::PtBr);
//! tracker.create_account("Ana", "Dev", "3000.00")?;
//! tracker.add_expense("2024", "Março", "Aluguel", "1000.00")?;
//!
//! let summary = tracker.year_summary("2024")?;
//! assert_eq!(summary.months[0].available_balance.to_string(), "2000.00");
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{TrackerError, TrackerResult, ValidationError};
