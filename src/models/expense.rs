//! Expense model
//!
//! A single dated spend. Expenses are created only by the ledger and never
//! change afterwards, so all fields are read through accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    year: u32,
    month: Month,
    description: String,
    amount: Money,
    recorded_at: DateTime<Utc>,
}

impl Expense {
    pub(crate) fn new(year: u32, month: Month, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            year,
            month,
            description: description.into(),
            amount,
            recorded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(2024, Month::new(3).unwrap(), "Aluguel", Money::from_cents(100000));
        assert_eq!(expense.year(), 2024);
        assert_eq!(expense.month().number(), 3);
        assert_eq!(expense.description(), "Aluguel");
        assert_eq!(expense.amount().cents(), 100000);
    }

    #[test]
    fn test_empty_description_allowed() {
        let expense = Expense::new(2024, Month::new(1).unwrap(), "", Money::from_cents(1));
        assert!(expense.description().is_empty());
    }
}
