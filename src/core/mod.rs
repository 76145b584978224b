pub mod factorial;
pub mod factorial_program;
pub mod reverse;
pub mod reverse_program;
pub mod runner;

pub use crate::domain::model::{FactorialValue, OverflowPolicy, Sequence};
pub use crate::domain::ports::{FactorialOptions, Outcome, Program, ReverseOptions};
pub use crate::utils::error::Result;
