//! Line-oriented interactive console.
//!
//! # Responsibility
//! - Read validated numbers/text from any `BufRead` source.
//! - Present the main and manage menus and route choices to the service.
//! - Render course tables and reports as human-readable text.
//!
//! # Invariants
//! - Bad input is recovered locally by re-prompting; only I/O failure or a
//!   closed input stream ends a session early.
//! - The console never reaches into the record store except through
//!   `GradebookService`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod input;
pub mod menu;
pub mod render;
pub mod session;

pub use input::Console;
pub use session::Session;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Valid main menu selections.
pub const MAIN_MENU_RANGE: (i64, i64) = (0, 8);
/// Valid manage sub-menu selections.
pub const MANAGE_MENU_RANGE: (i64, i64) = (0, 5);
/// Accepted range for typed course ids.
pub const COURSE_ID_RANGE: (i64, i64) = (1, 1_000_000);
/// Accepted range for assignment maximum points at the prompt.
pub const MAX_POINTS_RANGE: (f64, f64) = (1.0, 10_000.0);

/// Session-ending console failure.
#[derive(Debug)]
pub enum ConsoleError {
    /// Reading from input or writing to output failed.
    Io(std::io::Error),
    /// Input reached end-of-stream while a prompt was waiting.
    InputClosed,
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::InputClosed => write!(f, "input closed before the session was exited"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
