use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Array used by the reversal program when no values are given.
pub const DEFAULT_SEQUENCE: [i32; 5] = [1, 2, 3, 4, 5];

/// An ordered list of integers, reversed in place by [`Sequence::reverse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<i32>,
}

impl Sequence {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn reverse(&mut self) {
        crate::core::reverse::reverse_in_place(&mut self.values);
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE.to_vec())
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

/// Every element is followed by a single space, trailing one included.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

/// How the factorial accumulator handles results that outgrow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Arbitrary precision, never overflows.
    #[default]
    Big,
    /// 64-bit unsigned accumulator, overflow is an error.
    Checked,
    /// 32-bit signed accumulator with two's-complement wraparound.
    Wrapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorialValue {
    Wrapped(i32),
    Checked(u64),
    Big(BigUint),
}

impl fmt::Display for FactorialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorialValue::Wrapped(v) => write!(f, "{}", v),
            FactorialValue::Checked(v) => write!(f, "{}", v),
            FactorialValue::Big(v) => write!(f, "{}", v),
        }
    }
}

/// Output layout shared by both programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReverseReport {
    pub original: Sequence,
    pub reversed: Sequence,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorialReport {
    pub n: i32,
    pub policy: OverflowPolicy,
    /// Decimal string so that arbitrary-precision results survive JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_display_has_trailing_space() {
        assert_eq!(Sequence::default().to_string(), "1 2 3 4 5 ");
        assert_eq!(Sequence::new(vec![]).to_string(), "");
        assert_eq!(Sequence::new(vec![-4]).to_string(), "-4 ");
    }

    #[test]
    fn test_sequence_reverse_in_place() {
        let mut sequence = Sequence::from(vec![3, 1, 4, 1, 5, 9]);
        sequence.reverse();
        assert_eq!(sequence.as_slice(), &[9, 5, 1, 4, 1, 3]);
        assert_eq!(sequence.len(), 6);
        assert!(!sequence.is_empty());
    }

    #[test]
    fn test_factorial_value_display() {
        assert_eq!(FactorialValue::Wrapped(-1).to_string(), "-1");
        assert_eq!(FactorialValue::Checked(120).to_string(), "120");
        assert_eq!(
            FactorialValue::Big(BigUint::from(720u32)).to_string(),
            "720"
        );
    }

    #[test]
    fn test_factorial_report_skips_missing_fields() {
        let report = FactorialReport {
            n: -3,
            policy: OverflowPolicy::Big,
            result: None,
            error: Some("negative".to_string()),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"n": -3, "policy": "big", "error": "negative"})
        );
    }
}
