//! CSV Export functionality
//!
//! Spreadsheet-friendly rendering of the year summary: one row per expense,
//! followed by a total row for each month.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::YearSummary;

/// Label written in the description column of a month's total row
pub const TOTAL_LABEL: &str = "TOTAL";

/// Export a year summary to CSV
pub fn export_summary_csv<W: Write>(summary: &YearSummary, writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    let year = summary.year.to_string();

    csv_writer
        .write_record(["Year", "Month", "Description", "Amount"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for month in &summary.months {
        for item in &month.items {
            csv_writer
                .write_record([
                    year.as_str(),
                    month.month_name,
                    item.description.as_str(),
                    item.amount.to_string().as_str(),
                ])
                .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        csv_writer
            .write_record([
                year.as_str(),
                month.month_name,
                TOTAL_LABEL,
                month.total.to_string().as_str(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::tests::sample_summary;

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        export_summary_csv(&sample_summary(), &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Year,Month,Description,Amount");
        assert_eq!(lines[1], "2024,Março,Aluguel,1000.00");
        assert_eq!(lines[2], "2024,Março,\"Carro, seguro\",1500.00");
        assert_eq!(lines[3], "2024,Março,TOTAL,2500.00");
        assert_eq!(lines.len(), 4);
    }
}
