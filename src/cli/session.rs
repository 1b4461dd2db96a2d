//! Session commands
//!
//! One line of shell or script input is one command. Lines are split with
//! shell-style quoting and parsed with clap, then dispatched to the tracker.

use std::io::Write;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_balance_table, format_expense_list, format_month_table};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml};
use crate::services::ExpenseTracker;

#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Commands available inside an expense session"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted inside a session
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Confirm the user (required before anything else)
    Account {
        /// Full name
        name: String,
        /// Job title or role
        role: String,
        /// Monthly salary (e.g. "3000.00")
        #[arg(allow_hyphen_values = true)]
        salary: String,
    },
    /// Record an expense against a month's salary
    Expense {
        /// Year (e.g. 2024)
        #[arg(allow_hyphen_values = true)]
        year: String,
        /// Full month name (e.g. "Março")
        month: String,
        /// Amount (e.g. "1000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Show spending per month for a year
    Summary {
        /// Year to summarize
        #[arg(allow_hyphen_values = true)]
        year: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
    /// Show the available balance of every month
    Balance,
    /// List recorded expenses
    List {
        /// Only show expenses from this year
        #[arg(short, long, allow_hyphen_values = true)]
        year: Option<String>,
    },
    /// Show the accepted month names
    Months,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Output format for the `summary` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Text,
    Csv,
    Json,
    Yaml,
}

/// Whether the input loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// A tracker plus the display settings used to render its output
#[derive(Debug)]
pub struct Session {
    tracker: ExpenseTracker,
    currency: String,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            tracker: ExpenseTracker::new(settings.locale),
            currency: settings.currency_symbol.clone(),
        }
    }

    pub fn tracker(&self) -> &ExpenseTracker {
        &self.tracker
    }

    /// Parse and run one line of input
    ///
    /// Blank lines and `#` comments are skipped. `help` output is written to
    /// `out` and is not an error.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> TrackerResult<LoopControl> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(LoopControl::Continue);
        }

        let tokens = shell_words::split(line).map_err(|e| TrackerError::Usage(e.to_string()))?;

        match SessionLine::try_parse_from(tokens) {
            Ok(parsed) => self.execute(parsed.command, out),
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                write!(out, "{}", err.render())?;
                Ok(LoopControl::Continue)
            }
            Err(err) => Err(TrackerError::Usage(
                err.render().to_string().trim_end().to_string(),
            )),
        }
    }

    /// Run an already-parsed command
    pub fn execute<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> TrackerResult<LoopControl> {
        let currency = self.currency.as_str();
        let locale = self.tracker.locale();

        match command {
            SessionCommand::Account { name, role, salary } => {
                let account = self.tracker.create_account(&name, &role, &salary)?;
                writeln!(out, "User confirmed: {}", account)?;
                writeln!(
                    out,
                    "  Monthly salary: {}",
                    account.monthly_salary().format_with_symbol(currency)
                )?;
                writeln!(out, "Add your monthly expenses, then calculate them!")?;
            }

            SessionCommand::Expense {
                year,
                month,
                amount,
                description,
            } => {
                let expense = self.tracker.add_expense(&year, &month, &description, &amount)?;
                let (year, month, amount) = (expense.year(), expense.month(), expense.amount());
                let available = self.tracker.ledger()?.account().available_balance(month);

                writeln!(
                    out,
                    "Expense added: {} in {} {}",
                    amount.format_with_symbol(currency),
                    locale.month_name(month),
                    year
                )?;
                writeln!(
                    out,
                    "  Available for {}: {}",
                    locale.month_name(month),
                    available.format_with_symbol(currency)
                )?;
            }

            SessionCommand::Summary { year, format } => {
                let summary = self.tracker.year_summary(&year)?;
                match format {
                    SummaryFormat::Text => write!(out, "{}", summary.format_terminal(currency))?,
                    SummaryFormat::Csv => export_summary_csv(&summary, out)?,
                    SummaryFormat::Json => export_summary_json(&summary, out)?,
                    SummaryFormat::Yaml => export_summary_yaml(&summary, out)?,
                }
            }

            SessionCommand::Balance => {
                let account = self.tracker.ledger()?.account();
                writeln!(out, "{}", format_balance_table(account, locale, currency))?;
            }

            SessionCommand::List { year } => {
                let expenses = self.tracker.expenses(year.as_deref())?;
                writeln!(out, "{}", format_expense_list(&expenses, locale, currency))?;
            }

            SessionCommand::Months => {
                writeln!(out, "{}", format_month_table(locale))?;
            }

            SessionCommand::Quit => return Ok(LoopControl::Exit),
        }

        Ok(LoopControl::Continue)
    }
}
