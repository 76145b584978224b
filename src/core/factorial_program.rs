use crate::core::factorial::factorial;
use crate::core::{Outcome, OverflowPolicy, Program};
use crate::domain::model::{FactorialReport, OutputFormat};
use crate::domain::ports::FactorialOptions;
use crate::utils::error::{KataError, Result};
use std::io::{BufRead, Read, Write};

pub const PROMPT: &str = "Enter a non-negative integer: ";

/// Longest input line accepted while looking for the argument.
pub const MAX_LINE_BYTES: u64 = 1024;

pub struct FactorialProgram<C: FactorialOptions> {
    pub(crate) config: C,
}

impl<C: FactorialOptions> FactorialProgram<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    fn check_bound(&self, n: i32) -> Result<()> {
        let max = self.config.max_argument();
        if self.config.overflow() == OverflowPolicy::Big && n > max {
            return Err(KataError::ArgumentTooLarge { value: n, max });
        }
        Ok(())
    }
}

impl<C: FactorialOptions> Program for FactorialProgram<C> {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Outcome> {
        let format = self.config.format();
        if format == OutputFormat::Text {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        let n = read_integer(input)?;
        tracing::debug!(n, "read factorial argument");
        self.check_bound(n)?;

        let policy = self.config.overflow();
        let (outcome, result) = match factorial(n, policy) {
            Ok(value) => (Outcome::Completed, Ok(value.to_string())),
            Err(e @ KataError::NegativeFactorial { .. }) => {
                tracing::warn!(n, "negative factorial argument");
                (Outcome::Reported, Err(e))
            }
            Err(e) => return Err(e),
        };

        match format {
            OutputFormat::Text => match &result {
                Ok(value) => writeln!(output, "Factorial of {} = {}", n, value)?,
                Err(e) => writeln!(output, "{}", e.user_friendly_message())?,
            },
            OutputFormat::Json => {
                let report = FactorialReport {
                    n,
                    policy,
                    error: result
                        .as_ref()
                        .err()
                        .map(|_| "Factorial of a negative number doesn't exist.".to_string()),
                    result: result.ok(),
                };
                serde_json::to_writer(&mut *output, &report)?;
                writeln!(output)?;
            }
        }

        Ok(outcome)
    }
}

/// Reads the first whitespace-delimited token, skipping blank lines, and
/// parses it as a 32-bit integer. Lines are capped at [`MAX_LINE_BYTES`].
pub fn read_integer(input: &mut dyn BufRead) -> Result<i32> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = (&mut *input)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut line)?;
        if read == 0 {
            return Err(KataError::MissingInput);
        }
        if read as u64 == MAX_LINE_BYTES && line.last() != Some(&b'\n') {
            let head = &line[..line.len().min(16)];
            return Err(KataError::InvalidInput {
                token: format!("{}...", String::from_utf8_lossy(head).trim()),
                reason: format!("line longer than {} bytes", MAX_LINE_BYTES),
            });
        }

        let token = line
            .split(|b| b.is_ascii_whitespace())
            .find(|t| !t.is_empty());
        if let Some(token) = token {
            let token = String::from_utf8_lossy(token);
            return token.parse::<i32>().map_err(|e| KataError::InvalidInput {
                token: token.to_string(),
                reason: e.to_string(),
            });
        }
    }
}
