use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriggerError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Plan file parsing error: {0}")]
    PlanParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Triggering {job} failed with status {status}: {message}")]
    RemoteCallFailed {
        job: String,
        status: u16,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Remote,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl TriggerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TriggerError::ConfigError { .. }
            | TriggerError::MissingConfigError { .. }
            | TriggerError::InvalidConfigValueError { .. }
            | TriggerError::PlanParseError(_) => ErrorCategory::Configuration,
            TriggerError::Http(_)
            | TriggerError::RemoteCallFailed { .. }
            | TriggerError::SerializationError(_) => ErrorCategory::Remote,
            TriggerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Remote => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 所有錯誤都是終止性的，沒有重試
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TriggerError::MissingConfigError { field } => {
                format!("Error triggering because {} is not set", field)
            }
            TriggerError::RemoteCallFailed { message, .. } => {
                format!("Error triggering the CircleCI: {}.", message)
            }
            TriggerError::Http(e) => format!("Error triggering the CircleCI: {}.", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TriggerError::MissingConfigError { .. } => {
                "Export the variable in the CI environment or pass it as a flag"
            }
            TriggerError::InvalidConfigValueError { .. } | TriggerError::ConfigError { .. } => {
                "Check the command line flags and environment variables"
            }
            TriggerError::PlanParseError(_) => "Check the syntax of the plan file",
            TriggerError::RemoteCallFailed { status: 401, .. }
            | TriggerError::RemoteCallFailed { status: 403, .. } => {
                "Check that the trigger token is valid for the target project"
            }
            TriggerError::RemoteCallFailed { status: 404, .. } => {
                "Check the endpoint URL and the job name"
            }
            TriggerError::RemoteCallFailed { .. } | TriggerError::Http(_) => {
                "Re-run the job once the CI service is reachable"
            }
            TriggerError::SerializationError(_) => "The CI service returned an unexpected body",
            TriggerError::IoError(_) => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, TriggerError>;
