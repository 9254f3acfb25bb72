//! Error handling for bruteforge

use thiserror::Error;

/// Main error type for bruteforge
#[derive(Error, Debug, Clone)]
pub enum BruteforgeError {
    #[error("{message}")]
    Usage { message: String },

    #[error("invalid length specified: {value}")]
    InvalidLength { value: String },

    #[error("error reading domains from file: {message}")]
    DomainFile {
        message: String,
        path: Option<String>,
    },

    #[error("error opening output file: {message}")]
    OutputOpen {
        message: String,
        path: Option<String>,
    },

    #[error("error writing to output file: {message}")]
    OutputWrite {
        message: String,
        path: Option<String>,
    },
}

impl BruteforgeError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an invalid length error
    pub fn invalid_length(value: impl Into<String>) -> Self {
        Self::InvalidLength {
            value: value.into(),
        }
    }

    /// Create a domain file error
    pub fn domain_file(message: impl Into<String>, path: Option<String>) -> Self {
        Self::DomainFile {
            message: message.into(),
            path,
        }
    }

    /// Create an output open error
    pub fn output_open(message: impl Into<String>, path: Option<String>) -> Self {
        Self::OutputOpen {
            message: message.into(),
            path,
        }
    }

    /// Create an output write error
    pub fn output_write(message: impl Into<String>, path: Option<String>) -> Self {
        Self::OutputWrite {
            message: message.into(),
            path,
        }
    }

    /// Usage errors are reported with the usage text and never reach error.log
    pub fn should_log(&self) -> bool {
        !matches!(self, Self::Usage { .. })
    }

    /// Get user-facing error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Usage { message } => message.clone(),
            Self::InvalidLength { .. } => "Invalid length specified".to_string(),
            Self::DomainFile { message, .. } => {
                format!("Error reading domains from file: {}", message)
            }
            Self::OutputOpen { message, .. } => {
                format!("Error opening output file: {}", message)
            }
            Self::OutputWrite { message, .. } => {
                format!("Error writing to output file: {}", message)
            }
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BruteforgeError>;
