use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::format::Format;

/// Errors returned while resolving a flag value.
#[derive(Debug, Error)]
pub enum FlagError {
    #[error("file '{}' does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("'{}' is a directory, not a file", path.display())]
    IsADirectory { path: PathBuf },

    #[error("error reading file '{}': {source}", path.display())]
    FileReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `ext` keeps its leading dot and is empty when the file has none.
    #[error("unsupported data format in file: {ext}")]
    UnsupportedFileExtension { ext: String },

    #[error("unrecognisable input format in inline data")]
    UnrecognisedInlineFormat,

    #[error("error unmarshalling from {format}: {source}")]
    DecodeFailure {
        format: Format,
        #[source]
        source: DecodeError,
    },
}

/// Underlying decoder failure carried by [`FlagError::DecodeFailure`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fieldless classification of a [`FlagError`].
pub enum ErrorKind {
    FileNotFound,
    IsADirectory,
    FileReadFailure,
    UnsupportedFileExtension,
    UnrecognisedInlineFormat,
    DecodeFailure,
}

impl FlagError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlagError::FileNotFound { .. } => ErrorKind::FileNotFound,
            FlagError::IsADirectory { .. } => ErrorKind::IsADirectory,
            FlagError::FileReadFailure { .. } => ErrorKind::FileReadFailure,
            FlagError::UnsupportedFileExtension { .. } => ErrorKind::UnsupportedFileExtension,
            FlagError::UnrecognisedInlineFormat => ErrorKind::UnrecognisedInlineFormat,
            FlagError::DecodeFailure { .. } => ErrorKind::DecodeFailure,
        }
    }

    pub(crate) fn decode(format: Format, source: impl Into<DecodeError>) -> Self {
        FlagError::DecodeFailure {
            format,
            source: source.into(),
        }
    }
}
