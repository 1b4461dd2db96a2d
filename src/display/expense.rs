//! Expense and balance tables
//!
//! Formats expenses, month balances and the month-name table for terminal
//! output using `tabled`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::{Account, Expense, Locale, Month};
use crate::reports::SummaryItem;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Month")]
    month: &'static str,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Available")]
    available: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Month")]
    month: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "#")]
    number: u32,
    #[tabled(rename = "Name")]
    name: &'static str,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Description/amount table for one month of a summary
pub fn format_item_table(items: &[SummaryItem], currency: &str) -> String {
    render(
        items
            .iter()
            .map(|item| ItemRow {
                description: truncate(&item.description, DESCRIPTION_WIDTH),
                amount: item.amount.format_with_symbol(currency),
            })
            .collect(),
    )
}

/// Spent and available amounts for every month of the account
pub fn format_balance_table(account: &Account, locale: Locale, currency: &str) -> String {
    render(
        account
            .balances()
            .map(|(month, available)| BalanceRow {
                month: locale.month_name(month),
                spent: account.spent_in(month).format_with_symbol(currency),
                available: available.format_with_symbol(currency),
            })
            .collect(),
    )
}

/// Expenses in the order given
pub fn format_expense_list(expenses: &[&Expense], locale: Locale, currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    render(
        expenses
            .iter()
            .map(|e| ExpenseRow {
                id: e.id().to_string(),
                year: e.year(),
                month: locale.month_name(e.month()),
                description: truncate(e.description(), DESCRIPTION_WIDTH),
                amount: e.amount().format_with_symbol(currency),
            })
            .collect(),
    )
}

/// The locale's month-name table
pub fn format_month_table(locale: Locale) -> String {
    render(
        Month::all()
            .map(|month| MonthRow {
                number: month.number(),
                name: locale.month_name(month),
            })
            .collect(),
    )
}
