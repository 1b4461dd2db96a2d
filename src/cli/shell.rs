//! Interactive shell and script runner
//!
//! Both read session commands line by line. Command errors are reported and
//! the loop keeps going; only I/O failures on the streams themselves, or a
//! failed line under `fail_fast`, end the run early.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use super::session::{LoopControl, Session};
use crate::error::{TrackerError, TrackerResult};

const PROMPT: &str = "expenses> ";

/// How a run reads and reports
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print a prompt before each line
    pub prompt: bool,
    /// Stop at the first failing line and return its error
    pub fail_fast: bool,
    /// Prefix error reports with the input line number
    pub line_numbers: bool,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Lines that ran successfully (blank lines and comments included)
    pub succeeded: usize,
    /// Lines whose command failed
    pub failed: usize,
}

/// Feed every line of `input` to the session until EOF or `quit`
pub fn run_session<R, W, E>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    err: &mut E,
    options: RunOptions,
) -> TrackerResult<RunReport>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut report = RunReport::default();
    let mut line = String::new();
    let mut line_number = 0;

    loop {
        if options.prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        match session.execute_line(&line, out) {
            Ok(LoopControl::Continue) => report.succeeded += 1,
            Ok(LoopControl::Exit) => {
                report.succeeded += 1;
                break;
            }
            Err(error) if options.fail_fast => {
                tracing::debug!(line = line_number, "stopping at first failure");
                return Err(error);
            }
            Err(error) => {
                report.failed += 1;
                if options.line_numbers {
                    writeln!(err, "Error (line {}): {}", line_number, error)?;
                } else {
                    writeln!(err, "Error: {}", error)?;
                }
            }
        }
    }

    Ok(report)
}

/// Run the interactive shell on stdin
pub fn run_interactive(session: &mut Session) -> TrackerResult<RunReport> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    if prompt {
        println!("Expense tracker. Type 'help' for commands, 'quit' to leave.");
        println!("Start with: account <NAME> <ROLE> <SALARY>");
    }

    run_session(
        session,
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        RunOptions {
            prompt,
            ..RunOptions::default()
        },
    )
}

/// Run the commands in a script file
pub fn run_script(session: &mut Session, path: &Path, fail_fast: bool) -> TrackerResult<RunReport> {
    let file = File::open(path).map_err(|e| {
        TrackerError::Io(format!("Failed to open script '{}': {}", path.display(), e))
    })?;

    let report = run_session(
        session,
        BufReader::new(file),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        RunOptions {
            fail_fast,
            line_numbers: true,
            ..RunOptions::default()
        },
    )?;

    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failed,
        "script finished"
    );
    Ok(report)
}
