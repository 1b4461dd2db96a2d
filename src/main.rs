use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{run_interactive, run_script, Session};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::format_month_table;
use expense_tracker::logging::init_tracing;
use expense_tracker::models::Locale;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track monthly expenses against your salary",
    long_about = "Confirm your name, role and monthly salary, then record expenses \
                  month by month. Each month starts with your full salary available; \
                  summaries show what you spent and what is left to invest."
)]
struct Cli {
    /// Month-name table (pt-br or en)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_LOCALE")]
    locale: Option<Locale>,

    /// Currency symbol shown before amounts
    #[arg(long, global = true, env = "EXPENSE_TRACKER_CURRENCY")]
    currency: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Run session commands from a file
    Run {
        /// Path to the script, one command per line
        file: PathBuf,
        /// Stop at the first failing command and exit non-zero
        #[arg(long)]
        fail_fast: bool,
    },

    /// Show the accepted month names
    Months,

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    if let Some(currency) = cli.currency {
        settings.currency_symbol = currency;
    }

    init_tracing(if cli.verbose {
        "debug"
    } else {
        settings.log_filter.as_str()
    });
    tracing::debug!(locale = %settings.locale, base_dir = %paths.base_dir().display(), "settings loaded");

    match cli.command {
        None | Some(Commands::Shell) => {
            let mut session = Session::new(&settings);
            run_interactive(&mut session)?;
        }
        Some(Commands::Run { file, fail_fast }) => {
            let mut session = Session::new(&settings);
            let report = run_script(&mut session, &file, fail_fast)?;
            if report.failed > 0 {
                eprintln!("{} command(s) failed", report.failed);
            }
        }
        Some(Commands::Months) => {
            println!("{}", format_month_table(settings.locale));
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!();
            println!("Settings:");
            println!("  Locale:          {}", settings.locale);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log filter:      {}", settings.log_filter);
        }
    }

    Ok(())
}
