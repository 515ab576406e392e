//! Validated prompt readers.
//!
//! # Invariants
//! - Numeric prompts take the leading numeric token of a line and discard
//!   the rest of that line.
//! - Whitespace-only lines are skipped while a numeric answer is pending.
//! - Numeric prompts re-prompt until a value inside `[min, max]` arrives.

use crate::console::{ConsoleError, ConsoleResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{BufRead, Write};

static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer regex"));
static LEADING_DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid decimal regex")
});

/// Parses the leading whole number of `line`, ignoring trailing text.
pub fn parse_leading_int(line: &str) -> Option<i64> {
    LEADING_INT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses the leading decimal number of `line`, ignoring trailing text.
pub fn parse_leading_decimal(line: &str) -> Option<f64> {
    LEADING_DECIMAL_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Prompting wrapper around an input reader and an output writer.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Writer for free-form output.
    pub fn out(&mut self) -> &mut O {
        &mut self.output
    }

    /// Consumes the console and returns its writer.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Reads one full line of text; the line terminator is stripped.
    pub fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.write_prompt(prompt)?;
        self.next_line()
    }

    /// Reads a whole number in `[min, max]`, re-prompting until valid.
    pub fn read_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> ConsoleResult<i64> {
        loop {
            self.write_prompt(prompt)?;
            let line = self.next_token_line()?;
            let Some(value) = parse_leading_int(&line) else {
                writeln!(self.output, "Invalid input. Please enter a whole number.")?;
                continue;
            };
            if value < min || value > max {
                writeln!(
                    self.output,
                    "Please enter a number between {min} and {max}."
                )?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Reads a decimal number in `[min, max]`, re-prompting until valid.
    pub fn read_decimal_in_range(
        &mut self,
        prompt: &str,
        min: f64,
        max: f64,
    ) -> ConsoleResult<f64> {
        loop {
            self.write_prompt(prompt)?;
            let line = self.next_token_line()?;
            let Some(value) = parse_leading_decimal(&line) else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };
            if value < min || value > max {
                writeln!(self.output, "Please enter a value between {min} and {max}.")?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Yes/no prompt: only a leading `1` confirms.
    pub fn confirm(&mut self, prompt: &str) -> ConsoleResult<bool> {
        self.write_prompt(prompt)?;
        let line = self.next_token_line()?;
        Ok(parse_leading_int(&line) == Some(1))
    }

    /// Waits for the user to press Enter.
    pub fn pause(&mut self) -> ConsoleResult<()> {
        self.write_prompt("Press Enter to continue...")?;
        self.next_line().map(|_| ())
    }

    fn write_prompt(&mut self, prompt: &str) -> ConsoleResult<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    fn next_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn next_token_line(&mut self) -> ConsoleResult<String> {
        loop {
            let line = self.next_line()?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }
}
