//! Calendar month ordinal and the localized month-name tables
//!
//! The same table is used to resolve user input and to render summaries, so a
//! name accepted by the validator is always the name shown back to the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Month of the year, always in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Create a month from its ordinal, or `None` outside 1..=12
    pub fn new(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self(number as u8)),
            _ => None,
        }
    }

    /// Ordinal in 1..=12
    pub const fn number(self) -> u32 {
        self.0 as u32
    }

    /// Zero-based position, for indexing per-month tables
    pub(crate) const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("month {0} is outside 1-12")]
pub struct MonthOutOfRange(pub u8);

impl TryFrom<u8> for Month {
    type Error = MonthOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::new(u32::from(value)).ok_or(MonthOutOfRange(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

const PT_BR_MONTHS: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month-name table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Brazilian Portuguese ("Janeiro", "Março", ...)
    #[default]
    PtBr,
    /// English ("January", "March", ...)
    En,
}

impl Locale {
    /// The full twelve-entry name table, January first
    pub fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::PtBr => &PT_BR_MONTHS,
            Self::En => &EN_MONTHS,
        }
    }

    /// Display name for a month
    pub fn month_name(self, month: Month) -> &'static str {
        self.month_names()[month.index()]
    }

    /// Resolve an exact, case-sensitive full month name
    pub fn month_from_name(self, name: &str) -> Option<Month> {
        self.month_names()
            .iter()
            .zip(Month::all())
            .find_map(|(candidate, month)| (*candidate == name).then_some(month))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-br"),
            Self::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            other => Err(format!("unknown locale '{}' (expected pt-br or en)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range() {
        assert!(Month::new(0).is_none());
        assert!(Month::new(13).is_none());
        assert_eq!(Month::new(12).unwrap().number(), 12);
        assert_eq!(Month::all().count(), 12);
        assert_eq!(Month::try_from(13u8), Err(MonthOutOfRange(13)));
    }

    #[test]
    fn test_name_lookup_both_ways() {
        for locale in [Locale::PtBr, Locale::En] {
            for month in Month::all() {
                let name = locale.month_name(month);
                assert_eq!(locale.month_from_name(name), Some(month));
            }
        }
        assert_eq!(Locale::PtBr.month_name(Month::new(3).unwrap()), "Março");
        assert_eq!(Locale::En.month_name(Month::new(3).unwrap()), "March");
    }

    #[test]
    fn test_name_lookup_is_exact() {
        assert_eq!(Locale::PtBr.month_from_name("Marco"), None);
        assert_eq!(Locale::PtBr.month_from_name("março"), None);
        assert_eq!(Locale::PtBr.month_from_name("13"), None);
        assert_eq!(Locale::PtBr.month_from_name(" Março"), None);
        assert_eq!(Locale::PtBr.month_from_name("March"), None);
        assert_eq!(Locale::En.month_from_name("Março"), None);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("pt_br".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_serialization() {
        let month = Month::new(7).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "7");
        assert!(serde_json::from_str::<Month>("0").is_err());
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-br\"");
    }
}
