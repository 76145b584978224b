use crate::domain::model::{OutputFormat, OverflowPolicy};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// How a program run ended when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The computation ran and its result was printed.
    Completed,
    /// A domain error (e.g. negative factorial argument) was reported to
    /// the user instead of a result. Still a successful run.
    Reported,
}

/// A console program: reads what it needs from `input`, writes its output
/// to `output`.
pub trait Program {
    fn name(&self) -> &'static str;

    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Outcome>;
}

pub trait ReverseOptions {
    /// Values to reverse; `None` means the built-in five element array.
    fn values(&self) -> Option<Vec<i32>>;
    fn format(&self) -> OutputFormat;
}

pub trait FactorialOptions {
    fn overflow(&self) -> OverflowPolicy;
    /// Upper bound on the argument for arbitrary-precision runs.
    fn max_argument(&self) -> i32;
    fn format(&self) -> OutputFormat;
}
