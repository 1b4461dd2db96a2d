//! Export module for the expense tracker
//!
//! Renders a year summary in machine-readable formats:
//! - CSV: one row per expense plus month totals
//! - JSON: versioned structured export
//! - YAML: the JSON structure in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_summary_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
