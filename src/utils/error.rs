use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Source file not found or unreadable: {path}")]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Processing,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::SourceNotFound { .. } => ErrorCategory::Source,
            DashboardError::CsvError(_) | DashboardError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Source => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::SourceNotFound { path, .. } => format!(
                "Erro: O arquivo '{}' não foi encontrado. Verifique o caminho.",
                path
            ),
            DashboardError::CsvError(e) => format!("Could not parse the source file: {}", e),
            DashboardError::IoError(e) => format!("I/O failure: {}", e),
            DashboardError::SerializationError(e) => {
                format!("Could not serialize chart data: {}", e)
            }
            DashboardError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            DashboardError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DashboardError::SourceNotFound { .. } => {
                "Check --data-path (or [source].path in the config file) points to an existing file"
            }
            DashboardError::CsvError(_) => {
                "Check the delimiter, encoding and skip_rows settings match the source file"
            }
            DashboardError::IoError(_) => "Check file permissions and that the port is free",
            DashboardError::SerializationError(_) => "This is a bug, please report it",
            DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart"
            }
        }
    }

    /// 依嚴重程度決定結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High | ErrorSeverity::Critical => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
