//! Reports module for the expense tracker
//!
//! Render-ready views built from the ledger.

pub mod year_summary;

pub use year_summary::{MonthSummary, SummaryItem, YearSummary};
