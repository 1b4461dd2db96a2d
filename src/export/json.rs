//! JSON Export functionality
//!
//! Serializes a year summary with versioned metadata. The same structure backs
//! the YAML export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::YearSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Year summary export structure
///
/// Amounts are two-decimal strings without a currency symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    pub year: u32,

    /// Months with expenses, ascending
    pub months: Vec<MonthExport>,

    /// Total spent across the year
    pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthExport {
    pub month: u32,
    pub name: String,
    pub total: String,
    pub available_balance: String,
    pub items: Vec<ItemExport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemExport {
    pub description: String,
    pub amount: String,
}

impl SummaryExport {
    pub fn from_summary(summary: &YearSummary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            year: summary.year,
            months: summary
                .months
                .iter()
                .map(|m| MonthExport {
                    month: m.month.number(),
                    name: m.month_name.to_string(),
                    total: m.total.to_string(),
                    available_balance: m.available_balance.to_string(),
                    items: m
                        .items
                        .iter()
                        .map(|i| ItemExport {
                            description: i.description.clone(),
                            amount: i.amount.to_string(),
                        })
                        .collect(),
                })
                .collect(),
            total: summary.total.to_string(),
        }
    }
}

/// Export a year summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(summary: &YearSummary, writer: &mut W) -> TrackerResult<()> {
    let export = SummaryExport::from_summary(summary);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
