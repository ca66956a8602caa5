//! Error types shared across the crate.

/// Errors raised while loading configuration or setting up the application.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid value \"{value}\" for config key \"{key}\"")]
    InvalidConfig { key: String, value: String },

    #[error("Configuration error: {msg}")]
    ConfigurationError { msg: String },
}

/// Errors raised when user-provided auth input is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Phone number can not be empty")]
    PhoneEmpty,

    #[error("Invalid username Alias - {alias}. Instead use {expected}")]
    InvalidUsernameAlias { alias: String, expected: String },

    #[error("Unknown auth state \"{state}\"")]
    UnknownAuthState { state: String },

    #[error("Unknown access level \"{level}\"")]
    UnknownAccessLevel { level: String },
}
