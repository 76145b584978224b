use crate::core::ReverseOptions;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{parse_int_list, validate_range, Validate};
use clap::Parser;

/// Longest sequence accepted on the command line.
pub const MAX_VALUES: usize = 4096;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "array_reverse")]
#[command(about = "Reverse an array of integers in place and print both orders")]
pub struct ReverseConfig {
    /// Comma separated integers to reverse instead of 1,2,3,4,5 ("" for none)
    // Fully qualified so clap parses the whole list as one value.
    #[arg(long, value_parser = parse_values, allow_hyphen_values = true)]
    pub values: Option<::std::vec::Vec<i32>>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_values(raw: &str) -> Result<Vec<i32>> {
    parse_int_list("values", raw)
}

impl ReverseOptions for ReverseConfig {
    fn values(&self) -> Option<Vec<i32>> {
        self.values.clone()
    }

    fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for ReverseConfig {
    fn validate(&self) -> Result<()> {
        if let Some(values) = &self.values {
            validate_range("values", values.len(), 0, MAX_VALUES)?;
        }
        Ok(())
    }
}
