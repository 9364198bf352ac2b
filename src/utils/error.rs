use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Malformed CSV in '{filename}': record {record} has {fields} fields, expected 2")]
    MalformedInput {
        filename: String,
        record: usize,
        fields: usize,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request to '{url}' failed: {source}")]
    TransportError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    Output,
}

impl CheckerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckerError::MalformedInput { .. } | CheckerError::CsvError(_) => ErrorCategory::Input,
            CheckerError::IoError(_) => ErrorCategory::Input,
            CheckerError::TransportError { .. } | CheckerError::ClientError(_) => {
                ErrorCategory::Network
            }
            CheckerError::ConfigError { .. }
            | CheckerError::InvalidConfigValueError { .. }
            | CheckerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CheckerError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    /// Structural problems with the CSV file, as opposed to the file being unreadable.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            CheckerError::MalformedInput { .. } | CheckerError::CsvError(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckerError::MalformedInput { filename, .. } => {
                format!("Error processing CSV file '{}'. Check file structure.", filename)
            }
            CheckerError::CsvError(e) => format!("Could not parse CSV input: {}", e),
            CheckerError::IoError(e) => format!("Could not read input: {}", e),
            CheckerError::TransportError { url, source } => {
                format!("Request to {} failed: {}", url, source)
            }
            CheckerError::ClientError(e) => format!("Could not build HTTP client: {}", e),
            CheckerError::SerializationError(e) => format!("Could not write report: {}", e),
            CheckerError::ConfigError { message } => format!("Invalid configuration: {}", message),
            CheckerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            CheckerError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Make sure the file exists and every row has exactly two comma-separated columns"
            }
            ErrorCategory::Network => {
                "Check that the source host is reachable, or pass --timeout to bound slow requests"
            }
            ErrorCategory::Configuration => "Review the command line flags and the --config file",
            ErrorCategory::Output => "Check that the report path is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
