use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::IoError(_) => ErrorCategory::Io,
            DrillError::SerializationError(_) | DrillError::CsvError(_) => ErrorCategory::Output,
            DrillError::ConfigError { .. }
            | DrillError::ConfigValidationError { .. }
            | DrillError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DrillError::IndexOutOfRange { .. }
            | DrillError::Overflow { .. }
            | DrillError::InvalidInput { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrillError::IoError(_) => "Check that the output directory exists and is writable",
            DrillError::SerializationError(_) | DrillError::CsvError(_) => {
                "Try another report format with --format"
            }
            DrillError::ConfigError { .. } | DrillError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            DrillError::InvalidConfigValueError { .. } => {
                "Fix the highlighted configuration value and run again"
            }
            DrillError::IndexOutOfRange { .. } => {
                "Use a remover index smaller than the number of values"
            }
            DrillError::Overflow { .. } => "Use smaller input values",
            DrillError::InvalidInput { .. } => "Provide input containing at least one letter",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Configuration => format!("The configuration is not usable: {}", self),
            ErrorCategory::Data => format!("An exercise rejected its input: {}", self),
            ErrorCategory::Output => format!("The report could not be rendered: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = DrillError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("Index 7"));

        let err = DrillError::InvalidConfigValueError {
            field: "report.output_path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = DrillError::from(std::io::Error::other("disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_error_is_at_least_medium() {
        let errors = [
            DrillError::InvalidInput {
                message: "no letters".to_string(),
            },
            DrillError::ConfigError {
                message: "bad".to_string(),
            },
            DrillError::from(serde_json::from_str::<i64>("x").unwrap_err()),
            DrillError::from(std::io::Error::other("disk full")),
        ];

        for err in &errors {
            assert!(err.severity() >= ErrorSeverity::Medium, "{:?}", err);
        }
    }
}
