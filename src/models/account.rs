//! Account model
//!
//! The confirmed user: identity fields plus the salary left to spend in each
//! month of the year.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use super::month::Month;
use crate::error::ValidationError;

/// A salaried user with a per-month available balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: String,
    role: String,
    monthly_salary: Money,
    /// Indexed by `Month::index`; starts at `monthly_salary` for every month
    available_balance: [Money; 12],
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account whose twelve monthly balances all start at `salary`
    ///
    /// A year's salary must fit in `Money`, so totals across every month can
    /// always be summed.
    pub fn create(name: &str, role: &str, salary: Money) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        let role = role.trim();
        if role.is_empty() {
            return Err(ValidationError::MissingField("role"));
        }

        if !salary.is_positive() || salary.checked_mul(12).is_none() {
            return Err(ValidationError::InvalidSalary);
        }

        Ok(Self {
            id: AccountId::new(),
            name: name.to_string(),
            role: role.to_string(),
            monthly_salary: salary,
            available_balance: [salary; 12],
            created_at: Utc::now(),
        })
    }

    /// Subtract a spend from the month's balance
    ///
    /// No lower bound is enforced here; the ledger checks sufficiency first.
    pub fn apply_spend(&mut self, month: Month, amount: Money) {
        self.available_balance[month.index()] -= amount;
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn monthly_salary(&self) -> Money {
        self.monthly_salary
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Salary still available in `month`
    pub fn available_balance(&self, month: Month) -> Money {
        self.available_balance[month.index()]
    }

    /// Amount already spent in `month`
    pub fn spent_in(&self, month: Month) -> Money {
        self.monthly_salary - self.available_balance(month)
    }

    /// Every month with its available balance, January first
    pub fn balances(&self) -> impl Iterator<Item = (Month, Money)> + '_ {
        Month::all().map(move |month| (month, self.available_balance(month)))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
