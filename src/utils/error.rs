use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dataset out of sync: {labels} labels but {values} values")]
    LengthMismatchError { labels: usize, values: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ReportError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::IoError(_) => ErrorSeverity::Critical,
            ReportError::SerializationError(_) | ReportError::CsvError(_) => ErrorSeverity::High,
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            ReportError::LengthMismatchError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::IoError(_) => "Check that stdout is writable and the config path exists",
            ReportError::SerializationError(_) | ReportError::CsvError(_) => {
                "Try the plain text format with --format text"
            }
            ReportError::ConfigError { .. } => "Make sure the config file is valid TOML",
            ReportError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file or on the command line"
            }
            ReportError::LengthMismatchError { .. } => {
                "Every label needs exactly one value; fix the dataset definition"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("Could not read or write: {}", e),
            ReportError::SerializationError(e) => format!("Could not encode report as JSON: {}", e),
            ReportError::CsvError(e) => format!("Could not encode report as CSV: {}", e),
            ReportError::ConfigError { message } => format!("Bad configuration: {}", message),
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ReportError::LengthMismatchError { labels, values } => format!(
                "Dataset is broken: {} labels paired with {} values",
                labels, values
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
