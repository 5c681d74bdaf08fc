use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to read source file {path}: {source}")]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {path}: {source}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl CodegenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CodegenError::ConfigError { .. }
            | CodegenError::ConfigValidationError { .. }
            | CodegenError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CodegenError::SourceReadError { .. } => ErrorCategory::Input,
            CodegenError::OutputWriteError { .. } => ErrorCategory::Output,
            CodegenError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binary: 1 for bad settings or input, 3 for
    /// output and internal failures.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CodegenError::SourceReadError { path, .. } => format!(
                "Check that {} is a readable UTF-8 text file",
                path.display()
            ),
            CodegenError::OutputWriteError { path, .. } => format!(
                "Check permissions and free space for {}",
                path.display()
            ),
            CodegenError::SerializationError(_) => {
                "Re-run with --summary-format text".to_string()
            }
            CodegenError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            CodegenError::ConfigValidationError { field, .. }
            | CodegenError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting on the command line or in the config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Could not read ELP source data: {}", self),
            ErrorCategory::Output => format!("Could not write generated tables: {}", self),
            ErrorCategory::Internal => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;
