use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Greeting delivery failed: {message}")]
    GreetingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::IoError(_) => ErrorCategory::Io,
            GatewayError::MissingConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GatewayError::GreetingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GatewayError::MissingConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            GatewayError::IoError(_) => ErrorSeverity::High,
            GatewayError::GreetingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GatewayError::IoError(_) => {
                "Check that the process console is attached and writable".to_string()
            }
            GatewayError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            GatewayError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value passed for '{}'", field)
            }
            GatewayError::GreetingError { .. } => {
                "Check the console session and re-run the gateway".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::IoError(e) => format!("Could not write to the console: {}", e),
            GatewayError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            GatewayError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!(
                "Configuration field '{}' got invalid value '{}': {}",
                field, value, reason
            ),
            GatewayError::GreetingError { message } => {
                format!("Startup greeting failed: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
