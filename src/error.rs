use std::path::PathBuf;

use crate::emit::EmitError;
use crate::reader::ReadError;
use crate::registry::RegistryError;

/// Everything that can stop a generation run. All of it is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("invalid configuration: {message}")]
    Config { message: String },
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error("cannot write {}: {error}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config { message: message.into() }
    }

    /// Stable diagnostic code, explained by `herr --explain`.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Read(ReadError::MalformedRow { .. }) => "HERR-R001",
            Error::Read(ReadError::RowCodeMismatch { .. }) => "HERR-R002",
            Error::Read(ReadError::InvalidLabel { .. }) => "HERR-R003",
            Error::Read(ReadError::Io { .. }) => "HERR-R004",
            Error::Read(ReadError::InvalidPrefix { .. }) => "HERR-R005",
            Error::Registry(RegistryError::DuplicateIdentity { .. }) => "HERR-V001",
            Error::Registry(RegistryError::DuplicateLabel { .. }) => "HERR-V002",
            Error::Config { .. } => "HERR-C001",
            Error::Emit(_) => "HERR-E001",
            Error::Write { .. } => "HERR-W001",
        }
    }
}
