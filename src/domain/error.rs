use std::io;

use thiserror::Error;

use crate::domain::dtd::DtdError;

/// Library-wide error type for l10n-migrate operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The localization repository path does not exist.
    #[error("path: [{0}] is invalid")]
    RepositoryNotFound(String),

    /// No mapping file or directory at the configured location.
    #[error("config: no file found at [{0}]")]
    ConfigNotFound(String),

    /// A mapping references a DTD file that is not in the repository.
    #[error("Source file not found: {0}")]
    SourceFileNotFound(String),

    /// A mapping references a path outside the repository root.
    #[error("Path '{0}' escapes the repository root")]
    PathEscapesRepository(String),

    /// DTD content could not be parsed.
    #[error("Failed to parse {file}: {source}")]
    Dtd {
        file: String,
        #[source]
        source: DtdError,
    },

    /// Note template failed to compile or render.
    #[error("Invalid note template: {0}")]
    Template(String),

    /// Reference properties could not be fetched.
    #[error("Failed to fetch notes from {location}: {details}")]
    NoteFetch { location: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
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
            | AppError::PathEscapesRepository(_)
            | AppError::Template(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Dtd { .. } => io::ErrorKind::InvalidData,
            AppError::RepositoryNotFound(_)
            | AppError::ConfigNotFound(_)
            | AppError::SourceFileNotFound(_) => io::ErrorKind::NotFound,
            AppError::NoteFetch { .. } => io::ErrorKind::Other,
        }
    }
}
