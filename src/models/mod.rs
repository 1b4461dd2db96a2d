//! Core data models for the expense tracker
//!
//! Value types (money, months, identifiers) and the two entities: the salaried
//! account and the expenses recorded against it.

pub mod account;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use account::Account;
pub use expense::Expense;
pub use ids::{AccountId, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use month::{Locale, Month, MonthOutOfRange};
