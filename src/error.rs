//! Error types for the mail relay.

/// Top-level error type for the relay.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while handing an envelope to the SMTP channel.
///
/// `Transport` carries the raw SMTP error text with no added framing;
/// both HTTP surfaces forward the description verbatim to the caller.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("invalid {field} address: {reason}")]
    InvalidAddress { field: &'static str, reason: String },

    #[error("failed to build message: {0}")]
    BuildMessage(String),

    #[error("{0}")]
    Transport(String),
}

/// Result type alias for the relay.
pub type Result<T> = std::result::Result<T, Error>;
