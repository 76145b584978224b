use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Factorial of a negative number doesn't exist: {value}")]
    NegativeFactorial { value: i32 },

    #[error("Factorial of {value} overflows a {bits}-bit accumulator")]
    Overflow { value: i32, bits: u32 },

    #[error("Invalid input '{token}': {reason}")]
    InvalidInput { token: String, reason: String },

    #[error("Argument {value} exceeds the configured maximum of {max}")]
    ArgumentTooLarge { value: i32, max: i32 },

    #[error("No input provided")]
    MissingInput,

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl KataError {
    /// Message shown to the user on the console, in the wording of the
    /// original programs where one exists.
    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::NegativeFactorial { .. } => {
                "Error! Factorial of a negative number doesn't exist.".to_string()
            }
            KataError::Overflow { value, bits } => format!(
                "Error! Factorial of {} does not fit in {} bits. Try --overflow big.",
                value, bits
            ),
            KataError::InvalidInput { token, .. } => {
                format!("Error! '{}' is not a valid integer.", token)
            }
            KataError::ArgumentTooLarge { value, max } => format!(
                "Error! {} is larger than the allowed maximum of {} (see --max-argument).",
                value, max
            ),
            KataError::MissingInput => "Error! No input provided.".to_string(),
            KataError::InvalidConfigValueError { field, reason, .. } => {
                format!("Error! Invalid --{}: {}", field.replace('_', "-"), reason)
            }
            KataError::IoError(e) => format!("Error! Console I/O failed: {}", e),
            KataError::SerializationError(e) => format!("Error! Could not encode output: {}", e),
        }
    }

    /// Process exit code for a failure that aborted the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            KataError::NegativeFactorial { .. } => 0,
            KataError::Overflow { .. }
            | KataError::InvalidInput { .. }
            | KataError::ArgumentTooLarge { .. }
            | KataError::MissingInput
            | KataError::InvalidConfigValueError { .. } => 1,
            KataError::IoError(_) | KataError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_factorial_is_not_fatal() {
        let err = KataError::NegativeFactorial { value: -3 };
        assert_eq!(err.exit_code(), 0);
        assert_eq!(
            err.user_friendly_message(),
            "Error! Factorial of a negative number doesn't exist."
        );
    }

    #[test]
    fn test_exit_codes() {
        let invalid = KataError::InvalidInput {
            token: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(invalid.exit_code(), 1);
        assert_eq!(invalid.user_friendly_message(), "Error! 'abc' is not a valid integer.");

        let io = KataError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.exit_code(), 3);
    }
}
