//! Custom error types for the admin API controller
//!
//! Provides structured error handling with context for different failure scenarios.

use reqwest::Method;
use std::fmt;

/// Main error type for the controller
#[derive(Debug)]
pub enum ControllerError {
    /// Configuration-related errors
    Config(ConfigError),

    /// Errors from calls to the agent's admin API
    Admin(AdminError),

    /// Other errors with context
    Other(String),
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Missing required configuration
    MissingRequired { field: String },

    /// Configuration parsing error
    ParseError { path: String, reason: String },
}

/// Admin API call error variants
#[derive(Debug)]
pub enum AdminError {
    /// The agent could not be reached: connection refused, timeout, DNS, TLS,
    /// or the body stream broke off while reading
    Transport {
        method: Method,
        path: String,
        source: reqwest::Error,
    },

    /// The agent answered with a non-2xx status code
    HttpStatus {
        method: Method,
        path: String,
        status: u16,
    },

    /// JSON decoding was requested and the non-empty body is not valid JSON
    Decode {
        path: String,
        text: String,
        reason: String,
    },
}

impl AdminError {
    /// HTTP status code for `HttpStatus` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AdminError::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, AdminError::Decode { .. })
    }

    /// Raw body that failed to decode
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            AdminError::Decode { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Config(e) => write!(f, "Configuration error: {}", e),
            ControllerError::Admin(e) => write!(f, "Admin API error: {}", e),
            ControllerError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ConfigError::ParseError { path, reason } => {
                write!(f, "Failed to parse config '{}': {}", path, reason)
            }
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Transport {
                method,
                path,
                source,
            } => {
                write!(f, "{} {} could not reach agent: {}", method, path, source)
            }
            AdminError::HttpStatus {
                method,
                path,
                status,
            } => {
                write!(f, "{} {} returned status {}", method, path, status)
            }
            AdminError::Decode { path, text, reason } => {
                write!(
                    f,
                    "Error decoding JSON from {} ({}): {}",
                    path, reason, text
                )
            }
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::Config(e) => Some(e),
            ControllerError::Admin(e) => Some(e),
            ControllerError::Other(_) => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for ControllerError {
    fn from(err: anyhow::Error) -> Self {
        ControllerError::Other(err.to_string())
    }
}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::Config(err)
    }
}

impl From<AdminError> for ControllerError {
    fn from(err: AdminError) -> Self {
        ControllerError::Admin(err)
    }
}
