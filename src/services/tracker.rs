//! Expense tracker session
//!
//! The boundary a presentation layer talks to. Every inbound call takes raw
//! field text, validates it, and only then touches the ledger. A session starts
//! without an account and moves to the confirmed state exactly once.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, Expense, Locale};
use crate::reports::YearSummary;
use crate::services::ledger::ExpenseLedger;
use crate::services::validation;

/// Single-user session over raw input text
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    locale: Locale,
    ledger: Option<ExpenseLedger>,
}

impl ExpenseTracker {
    /// Create a session with no confirmed account
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ledger: None,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether the user has been confirmed
    pub fn is_confirmed(&self) -> bool {
        self.ledger.is_some()
    }

    /// The ledger of the confirmed account
    pub fn ledger(&self) -> TrackerResult<&ExpenseLedger> {
        self.ledger.as_ref().ok_or(TrackerError::NoAccount)
    }

    /// Confirm the user from raw name, role and salary text
    pub fn create_account(
        &mut self,
        name: &str,
        role: &str,
        salary_text: &str,
    ) -> TrackerResult<&Account> {
        if self.ledger.is_some() {
            return Err(TrackerError::AccountAlreadyConfirmed);
        }

        let salary = validation::parse_salary(salary_text)?;
        let name = validation::require_field("name", name)?;
        let role = validation::require_field("role", role)?;
        let account = Account::create(name, role, salary)?;

        tracing::info!(id = %account.id(), salary = %salary, "account confirmed");
        Ok(self.ledger.insert(ExpenseLedger::new(account)).account())
    }

    /// Record an expense from raw year, month name and amount text
    pub fn add_expense(
        &mut self,
        year_text: &str,
        month_text: &str,
        description: &str,
        amount_text: &str,
    ) -> TrackerResult<&Expense> {
        let locale = self.locale;
        let ledger = self.ledger.as_mut().ok_or(TrackerError::NoAccount)?;

        let year = validation::parse_year(year_text)?;
        let month = validation::parse_month(month_text, locale)?;
        let amount = validation::parse_amount(amount_text)?;

        ledger.add_expense(year, month, description, amount)
    }

    /// Build the per-month summary for a raw year
    pub fn year_summary(&self, year_text: &str) -> TrackerResult<YearSummary> {
        let ledger = self.ledger()?;
        let year = validation::parse_year(year_text)?;
        Ok(YearSummary::build(ledger, year, self.locale))
    }

    /// Recorded expenses, optionally restricted to a raw year
    pub fn expenses(&self, year_text: Option<&str>) -> TrackerResult<Vec<&Expense>> {
        let ledger = self.ledger()?;
        match year_text {
            Some(text) => {
                let year = validation::parse_year(text)?;
                Ok(ledger.expenses_in_year(year).collect())
            }
            None => Ok(ledger.expenses().iter().collect()),
        }
    }
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
