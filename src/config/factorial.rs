use crate::core::{FactorialOptions, OverflowPolicy};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;

pub const DEFAULT_MAX_ARGUMENT: i32 = 20_000;
const MAX_ARGUMENT_LIMIT: i32 = 1_000_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "factorial")]
#[command(about = "Read a non-negative integer from stdin and print its factorial")]
pub struct FactorialConfig {
    /// Accumulator used for the product
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Big)]
    pub overflow: OverflowPolicy,

    /// Largest argument accepted with --overflow big
    #[arg(long, default_value_t = DEFAULT_MAX_ARGUMENT)]
    pub max_argument: i32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for FactorialConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Big,
            max_argument: DEFAULT_MAX_ARGUMENT,
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}

impl FactorialOptions for FactorialConfig {
    fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    fn max_argument(&self) -> i32 {
        self.max_argument
    }

    fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for FactorialConfig {
    fn validate(&self) -> Result<()> {
        validate_range("max_argument", self.max_argument, 0, MAX_ARGUMENT_LIMIT)
    }
}
