use std::{io, path::PathBuf};

use crate::core::codec::CodecError;

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

/// Errors raised by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A document had to be read but does not exist.
    #[error("translation file not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    /// A document exists but does not evaluate to a translation array.
    #[error("translation file {} could not be read: {source}", path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// A rename target is already taken.
    #[error("key '{key}' already exists in {}", path.display())]
    KeyConflict { path: PathBuf, key: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
