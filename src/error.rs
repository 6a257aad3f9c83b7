//! Error types for request handling and configuration.

use thiserror::Error;

/// Failure while turning a form submission into a completed HTTP exchange.
///
/// Every variant except `Transport` is raised before any network traffic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid URL provided: {0}")]
    InvalidUrl(String),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Request failed: {0}")]
    Transport(String),
}

impl RequestError {
    /// True for input problems caught before a request is attempted.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RequestError::Transport(_))
    }
}

/// Invalid configuration value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value: {field} - {reason}")]
    Invalid { field: &'static str, reason: String },
}
