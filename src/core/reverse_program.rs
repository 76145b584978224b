use crate::core::{Outcome, Program, Sequence};
use crate::domain::model::{OutputFormat, ReverseReport};
use crate::domain::ports::ReverseOptions;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct ReverseProgram<C: ReverseOptions> {
    pub(crate) config: C,
}

impl<C: ReverseOptions> ReverseProgram<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    fn sequence(&self) -> Sequence {
        self.config
            .values()
            .map(Sequence::new)
            .unwrap_or_default()
    }
}

impl<C: ReverseOptions> Program for ReverseProgram<C> {
    fn name(&self) -> &'static str {
        "array_reverse"
    }

    fn run(&self, _input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Outcome> {
        let mut sequence = self.sequence();
        tracing::debug!(len = sequence.len(), "reversing sequence");

        match self.config.format() {
            OutputFormat::Text => {
                writeln!(output, "Original array: {}", sequence)?;
                sequence.reverse();
                writeln!(output, "Reversed array: {}", sequence)?;
            }
            OutputFormat::Json => {
                let original = sequence.clone();
                sequence.reverse();
                let report = ReverseReport {
                    original,
                    reversed: sequence,
                };
                serde_json::to_writer(&mut *output, &report)?;
                writeln!(output)?;
            }
        }

        Ok(Outcome::Completed)
    }
}
