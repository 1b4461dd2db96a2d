//! YAML Export functionality
//!
//! Human-readable rendering of the year summary.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::SummaryExport;
use crate::reports::YearSummary;

/// Export a year summary to YAML
pub fn export_summary_yaml<W: Write>(summary: &YearSummary, writer: &mut W) -> TrackerResult<()> {
    let export = SummaryExport::from_summary(summary);

    writeln!(writer, "# Expense summary for {}", export.year)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
