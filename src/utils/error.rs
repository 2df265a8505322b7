use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreeningError {
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Scoring backend returned status {status}{suffix}", suffix = detail_suffix(.detail))]
    StatusError { status: u16, detail: Option<String> },

    #[error("Failed to decode scoring response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown model '{value}', expected one of: Neural Net, XGBoost, Spacy Similarity")]
    InvalidModel { value: String },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {}", d),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Data,
    Configuration,
    Usage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScreeningError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScreeningError::TransportError(_) => ErrorCategory::Network,
            ScreeningError::StatusError { .. } => ErrorCategory::Backend,
            ScreeningError::DecodeError(_) | ScreeningError::CsvError(_) => ErrorCategory::Data,
            ScreeningError::ConfigError { .. }
            | ScreeningError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScreeningError::InvalidModel { .. } => ErrorCategory::Usage,
            ScreeningError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScreeningError::TransportError(_) | ScreeningError::StatusError { .. } => {
                ErrorSeverity::Medium
            }
            ScreeningError::DecodeError(_)
            | ScreeningError::CsvError(_)
            | ScreeningError::ConfigError { .. }
            | ScreeningError::InvalidConfigValueError { .. }
            | ScreeningError::InvalidModel { .. } => ErrorSeverity::High,
            ScreeningError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScreeningError::TransportError(_) => {
                "Could not reach the scoring service".to_string()
            }
            ScreeningError::StatusError { status, .. } => {
                format!("The scoring service rejected the request (HTTP {})", status)
            }
            ScreeningError::DecodeError(_) => {
                "The scoring service sent a response that could not be read".to_string()
            }
            ScreeningError::CsvError(_) => "Failed to render candidates as CSV".to_string(),
            ScreeningError::IoError(e) => format!("File system error: {}", e),
            ScreeningError::ConfigError { message } => format!("Configuration problem: {}", message),
            ScreeningError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ScreeningError::InvalidModel { value } => format!("Unknown model '{}'", value),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and the endpoint URL",
            ErrorCategory::Backend => "Check the scoring service logs, then submit again",
            ErrorCategory::Data => "Verify the endpoint points at a candidate scoring service",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Usage => "Choose one of: Neural Net, XGBoost, Spacy Similarity",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScreeningError>;
