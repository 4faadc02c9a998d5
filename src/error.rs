//! Error types and handling for the `hfprop` library

use thiserror::Error;

/// Main error type for the `hfprop` library
#[derive(Error, Debug)]
pub enum HfPropError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Space-weather feed communication errors
    #[error("Network error: {message}")]
    Network { message: String },

    /// Input validation errors (grid squares, coordinates, precision)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Snapshot store errors
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// Malformed feed or cache documents
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl HfPropError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            HfPropError::Config { .. } => {
                "Configuration error. Please check your hfprop config file.".to_string()
            }
            HfPropError::Network { .. } => {
                "Unable to reach the space-weather service. Please check your internet connection."
                    .to_string()
            }
            HfPropError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            HfPropError::Cache { .. } => {
                "Solar data cache could not be used. You may need to delete the cache file."
                    .to_string()
            }
            HfPropError::Parse { message } => {
                format!("Could not understand the received data: {message}")
            }
            HfPropError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
