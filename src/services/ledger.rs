//! Expense ledger
//!
//! Owns the account and every expense recorded against it. Recording an
//! expense and debiting the account happen in one `&mut self` call, so the
//! balance table and the expense list can never disagree.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult, ValidationError};
use crate::models::{Account, Expense, Money, Month};

/// Append-only expense list bound to a single account
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    account: Account,
    expenses: Vec<Expense>,
}

/// Per-month aggregates for a set of expenses
///
/// Both maps have the same keys and iterate in ascending month order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTotals<'a> {
    /// Sum of amounts per month
    pub totals: BTreeMap<Month, Money>,
    /// Expenses per month, in the order they were recorded
    pub items: BTreeMap<Month, Vec<&'a Expense>>,
}

impl MonthlyTotals<'_> {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum across all months
    pub fn grand_total(&self) -> Money {
        self.totals.values().sum()
    }
}

impl ExpenseLedger {
    /// Create a ledger that takes ownership of the account
    pub fn new(account: Account) -> Self {
        Self {
            account,
            expenses: Vec::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Record an expense and debit the month's balance
    ///
    /// Rejected with `InsufficientBalance` when `amount` is greater than what
    /// is left for the month; an amount equal to the balance is accepted. A
    /// rejected expense leaves both the list and the balance untouched.
    pub fn add_expense(
        &mut self,
        year: u32,
        month: Month,
        description: &str,
        amount: Money,
    ) -> TrackerResult<&Expense> {
        if !amount.is_positive() {
            return Err(ValidationError::InvalidAmount.into());
        }

        let available = self.account.available_balance(month);
        if amount > available {
            tracing::debug!(
                year,
                month = month.number(),
                requested = %amount,
                available = %available,
                "expense rejected: insufficient balance"
            );
            return Err(TrackerError::InsufficientBalance {
                month,
                requested: amount,
                available,
            });
        }

        let expense = Expense::new(year, month, description, amount);
        self.account.apply_spend(month, amount);
        tracing::info!(
            id = %expense.id(),
            year,
            month = month.number(),
            amount = %amount,
            "expense recorded"
        );

        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Group expenses by month, restricted to `year` when one is given
    pub fn totals_for_year(&self, year: Option<u32>) -> MonthlyTotals<'_> {
        let mut aggregates = MonthlyTotals::default();

        for expense in self
            .expenses
            .iter()
            .filter(|e| year.map_or(true, |y| e.year() == y))
        {
            *aggregates
                .totals
                .entry(expense.month())
                .or_insert_with(Money::zero) += expense.amount();
            aggregates
                .items
                .entry(expense.month())
                .or_default()
                .push(expense);
        }

        aggregates
    }

    /// Expenses recorded for `year`, in insertion order
    pub fn expenses_in_year(&self, year: u32) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter().filter(move |e| e.year() == year)
    }
}
