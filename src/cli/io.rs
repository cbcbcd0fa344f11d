use std::fmt;

use crate::cli::input::LineSource;
use crate::cli::output;
use crate::cli::validation::{parse_amount, parse_choice, parse_integer, parse_text};
use crate::errors::{CliError, InputError};

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Asks for values until the user supplies a valid one.
pub struct Prompter<S> {
    source: S,
}

impl<S: LineSource> Prompter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// A non-negative amount of money.
    pub fn amount(&mut self, prompt: &str) -> Result<f64, CliError> {
        self.ask(prompt, parse_amount)
    }

    pub fn integer(
        &mut self,
        prompt: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<i64, CliError> {
        self.ask(prompt, |raw| parse_integer(raw, min, max))
    }

    /// A count between `min` and `max` inclusive.
    pub fn count(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32, CliError> {
        let value = self.integer(prompt, Some(min.into()), Some(max.into()))?;
        Ok(u32::try_from(value).unwrap_or(max))
    }

    pub fn choice<T: Copy>(
        &mut self,
        prompt: &str,
        options: &[T],
        label: impl Fn(T) -> &'static str,
    ) -> Result<T, CliError> {
        self.ask(prompt, |raw| parse_choice(raw, options, &label))
    }

    /// A `Yes`/`No` answer.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        self.choice(prompt, &[true, false], |yes| if yes { "Yes" } else { "No" })
    }

    /// Non-empty free text.
    pub fn text(&mut self, prompt: &str) -> Result<String, CliError> {
        self.ask(prompt, parse_text)
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, CliError> {
        loop {
            let raw = self.source.read_line(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(input = %raw, %err, "rejected input");
                    report_input_error(&err);
                }
            }
        }
    }
}

fn report_input_error(err: &InputError) {
    print_warning(err);
    if let InputError::UnknownChoice {
        suggestion: Some(suggestion),
        ..
    } = err
    {
        print_info(format!("Did you mean `{suggestion}`?"));
    }
}
