//! CLI command handlers
//!
//! Bridges clap argument parsing and line-oriented session input to the
//! tracker service.

pub mod session;
pub mod shell;

pub use session::{LoopControl, Session, SessionCommand, SummaryFormat};
pub use shell::{run_interactive, run_script, run_session, RunOptions, RunReport};
