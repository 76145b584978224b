#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{FactorialConfig, ReverseConfig};

pub use crate::core::{
    factorial::factorial, factorial_program::FactorialProgram, reverse::reverse_in_place,
    reverse_program::ReverseProgram, runner::KataRunner,
};
pub use utils::error::{KataError, Result};
