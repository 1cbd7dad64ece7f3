use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value the client cannot run with, caught after extraction.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
