//! Error types for agents-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from agents-core
    #[error(transparent)]
    Core(#[from] agents_core::Error),

    /// The tracing subscriber could not be installed
    #[error("failed to initialize logging: {message}")]
    Logging { message: String },
}
