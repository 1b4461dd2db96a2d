//! Display formatting for terminal output
//!
//! Table rendering for expenses and balances, plus the small line helpers the
//! reports share.

pub mod expense;

pub use expense::{format_balance_table, format_expense_list, format_item_table, format_month_table};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(separator(3).chars().count(), 3);
        assert_eq!(double_separator(2), "══");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Março", 5), "Março");
        assert_eq!(truncate("Manutenção do carro", 8), "Manut...");
    }
}
