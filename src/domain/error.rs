use std::io;

use thiserror::Error;

/// Library-wide error type for stubsmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Component name has no usable leaf once separators are stripped.
    #[error("Invalid component name '{0}': must contain at least one letter or number")]
    InvalidIdentifier(String),

    /// Generated file already exists and overwriting was not requested.
    #[error("{kind} already exists: {path}")]
    ComponentExists { kind: String, path: String },

    /// Project configuration file already exists.
    #[error("stubsmith.toml already exists (use --force to overwrite)")]
    ConfigExists,

    /// Built-in stub is not bundled with this build.
    #[error("Stub '{0}' not found")]
    StubMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidIdentifier(_)
            | AppError::TomlParse(_)
            | AppError::TomlSerialize(_) => io::ErrorKind::InvalidInput,
            AppError::StubMissing(_) => io::ErrorKind::NotFound,
            AppError::ComponentExists { .. } | AppError::ConfigExists => {
                io::ErrorKind::AlreadyExists
            }
        }
    }
}
