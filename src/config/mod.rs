pub mod factorial;
pub mod reverse;

pub use factorial::FactorialConfig;
pub use reverse::ReverseConfig;
