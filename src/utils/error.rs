use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropfillError {
    #[error("Roster request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Roster returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Roster parse error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV roster error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid roster URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DropfillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DropfillError::ApiError(_)
            | DropfillError::HttpStatusError { .. }
            | DropfillError::UrlError(_) => ErrorCategory::Network,
            DropfillError::SerializationError(_)
            | DropfillError::CsvError(_)
            | DropfillError::ProcessingError { .. } => ErrorCategory::Data,
            DropfillError::ConfigError { .. }
            | DropfillError::InvalidConfigValueError { .. }
            | DropfillError::MissingConfigError { .. } => ErrorCategory::Config,
            DropfillError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DropfillError::ApiError(_) => {
                "Check the roster URL and network connectivity".to_string()
            }
            DropfillError::HttpStatusError { status, .. } => format!(
                "The server answered {}; confirm the roster resource is published at that path",
                status
            ),
            DropfillError::UrlError(_) => "Check the roster URL / page URL for typos".to_string(),
            DropfillError::SerializationError(_) => {
                "Confirm the roster is a JSON array of objects with 'id' and 'name' fields"
                    .to_string()
            }
            DropfillError::CsvError(_) | DropfillError::ProcessingError { .. } => {
                "Each roster line must be 'id,name'".to_string()
            }
            DropfillError::IoError(_) => {
                "Check that the file path exists and is readable".to_string()
            }
            DropfillError::ConfigError { .. }
            | DropfillError::InvalidConfigValueError { .. }
            | DropfillError::MissingConfigError { .. } => {
                "Fix the configuration value and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DropfillError::ApiError(e) => format!("Could not reach the roster: {}", e),
            DropfillError::HttpStatusError { status, url } => {
                format!("The roster at {} answered HTTP {}", url, status)
            }
            DropfillError::SerializationError(_) => {
                "The roster content is not valid JSON in the expected shape".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DropfillError>;
