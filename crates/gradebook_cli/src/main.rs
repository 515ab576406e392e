//! Interactive gradebook console.
//!
//! # Responsibility
//! - Parse optional logging flags.
//! - Run one in-memory session over stdin/stdout.
//! - Exit with status 0 only when the user picks Exit.

use clap::Parser;
use gradebook_core::{default_log_level, init_logging, new_session};
use log::info;
use std::io::{self, BufWriter};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "gradebook")]
#[command(about = "Track courses, assignments and GPA for one session")]
#[command(long_about = None)]
struct Cli {
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,
    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("Warning: logging disabled: {err}");
        }
    }
    info!(
        "event=app_start module=cli status=ok version={}",
        gradebook_core::core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = new_session(stdin.lock(), BufWriter::new(stdout.lock()));

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            drop(session);
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
