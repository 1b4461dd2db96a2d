//! Year Summary Report
//!
//! Per-month spending for one year: what was spent, on what, and how much of
//! the month's salary is still available.

use crate::display::{self, expense::format_item_table};
use crate::models::{Locale, Money, Month};
use crate::services::ExpenseLedger;

/// One expense line inside a month
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    pub description: String,
    pub amount: Money,
}

/// Spending for a single month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: Month,
    /// Name from the session's month table
    pub month_name: &'static str,
    /// Sum of `items`
    pub total: Money,
    /// Items in the order they were recorded
    pub items: Vec<SummaryItem>,
    /// Salary left for the month
    pub available_balance: Money,
}

/// Year Summary
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: u32,
    pub locale: Locale,
    /// Months with at least one expense, ascending
    pub months: Vec<MonthSummary>,
    /// Total spent across the year
    pub total: Money,
}

impl YearSummary {
    /// Build the summary for `year` from the ledger's monthly aggregates
    pub fn build(ledger: &ExpenseLedger, year: u32, locale: Locale) -> Self {
        let aggregates = ledger.totals_for_year(Some(year));
        let account = ledger.account();

        let months: Vec<MonthSummary> = aggregates
            .totals
            .iter()
            .map(|(&month, &total)| MonthSummary {
                month,
                month_name: locale.month_name(month),
                total,
                items: aggregates
                    .items
                    .get(&month)
                    .map(|expenses| {
                        expenses
                            .iter()
                            .map(|e| SummaryItem {
                                description: e.description().to_string(),
                                amount: e.amount(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
                available_balance: account.available_balance(month),
            })
            .collect();

        Self {
            year,
            locale,
            total: aggregates.grand_total(),
            months,
        }
    }

    /// True when no expense was recorded for the year
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return format!("No expenses for year {}.\n", self.year);
        }

        let mut output = String::new();
        output.push_str(&format!("Expense Summary: {}\n", self.year));
        output.push_str(&display::double_separator(40));
        output.push('\n');

        for month in &self.months {
            output.push('\n');
            output.push_str(month.month_name);
            output.push('\n');
            output.push_str(&format_item_table(&month.items, currency));
            output.push('\n');
            output.push_str(&format!(
                "Total spent: {}\n",
                month.total.format_with_symbol(currency)
            ));
            output.push_str(&format!(
                "Available to invest: {}\n",
                month.available_balance.format_with_symbol(currency)
            ));
        }

        output.push('\n');
        output.push_str(&display::separator(40));
        output.push('\n');
        output.push_str(&format!(
            "Year total: {}\n",
            self.total.format_with_symbol(currency)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;

    fn month(n: u32) -> Month {
        Month::new(n).unwrap()
    }

    fn sample_ledger() -> ExpenseLedger {
        let account = Account::create("Ana", "Dev", Money::from_cents(300000)).unwrap();
        let mut ledger = ExpenseLedger::new(account);
        ledger
            .add_expense(2024, month(3), "Aluguel", Money::from_cents(100000))
            .unwrap();
        ledger
            .add_expense(2024, month(1), "Mercado", Money::from_cents(45050))
            .unwrap();
        ledger
            .add_expense(2024, month(3), "Carro", Money::from_cents(150000))
            .unwrap();
        ledger
            .add_expense(2023, month(3), "Antigo", Money::from_cents(1000))
            .unwrap();
        ledger
    }

    #[test]
    fn test_build_orders_months_and_items() {
        let summary = YearSummary::build(&sample_ledger(), 2024, Locale::PtBr);

        let names: Vec<&str> = summary.months.iter().map(|m| m.month_name).collect();
        assert_eq!(names, vec!["Janeiro", "Março"]);

        let march = &summary.months[1];
        assert_eq!(march.month, month(3));
        let items: Vec<&str> = march.items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(items, vec!["Aluguel", "Carro"]);
        assert_eq!(march.total, Money::from_cents(250000));
        // The 2023 expense shares March's balance but not the 2024 total
        assert_eq!(march.available_balance, Money::from_cents(49000));
        assert_eq!(summary.total, Money::from_cents(295050));
    }

    #[test]
    fn test_month_totals_match_items() {
        let summary = YearSummary::build(&sample_ledger(), 2024, Locale::En);
        for month in &summary.months {
            let items: Money = month.items.iter().map(|i| i.amount).sum();
            assert_eq!(month.total, items);
        }
    }

    #[test]
    fn test_empty_year() {
        let summary = YearSummary::build(&sample_ledger(), 1990, Locale::PtBr);
        assert!(summary.is_empty());
        assert!(summary.total.is_zero());
        assert_eq!(summary.format_terminal("R$"), "No expenses for year 1990.\n");
    }

    #[test]
    fn test_format_terminal() {
        let summary = YearSummary::build(&sample_ledger(), 2024, Locale::En);
        let output = summary.format_terminal("R$");

        assert!(output.contains("Expense Summary: 2024"));
        assert!(output.contains("January"));
        assert!(output.contains("March"));
        assert!(output.contains("Aluguel"));
        assert!(output.contains("R$1000.00"));
        assert!(output.contains("Total spent: R$2500.00"));
        assert!(output.contains("Available to invest: R$490.00"));
        assert!(output.contains("Year total: R$2950.50"));
        assert!(!output.contains("Antigo"));
    }
}
