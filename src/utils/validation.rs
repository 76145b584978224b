use crate::utils::error::{KataError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Parses a comma separated list of 32-bit integers, e.g. `1, 2,3`.
/// An empty or blank string yields an empty list.
pub fn parse_int_list(field_name: &str, raw: &str) -> Result<Vec<i32>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i32>()
                .map_err(|e| KataError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: part.to_string(),
                    reason: format!("not a 32-bit integer ({})", e),
                })
        })
        .collect()
}
