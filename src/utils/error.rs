use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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
}

impl PlannerError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::IoError(e) => format!("Could not read or write a file: {}", e),
            PlannerError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlannerError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            PlannerError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::IoError(_) => "Check that the path exists and is readable",
            PlannerError::ConfigError { .. } | PlannerError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            PlannerError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the command line or configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
