use thiserror::Error;

/// Errors from validating client input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The message field was absent, null, or an empty string.
    #[error("No message provided")]
    NoMessage,

    /// The request body could not be decoded at all.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// Errors from conversation log persistence.
///
/// Stores report these through tracing and return them to the caller, which
/// treats persistence as best-effort.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on '{path}': {message}")]
    Io { path: String, message: String },

    #[error("malformed conversation log: {0}")]
    Malformed(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("database error: {0}")]
    Database(String),
}

/// Errors raised while assembling runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found. Set the {0} environment variable.")]
    MissingApiKey(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
