//! Reading and writing translation documents.
//!
//! Documents are PHP files returning a (possibly nested) array of strings.
//! - `lexer`: tokenizer for the PHP subset translation files use
//! - `parser`: tokens -> [`Translations`]
//! - `render`: [`Translations`] -> canonical document text

mod lexer;
mod parser;
mod render;

use std::{io, path::Path};

use tracing::debug;

pub use parser::parse;
pub use render::{PREAMBLE, render};

use crate::core::{
    data::Translations,
    error::{CatalogError, Result},
    store::FileStore,
};

/// A document that does not evaluate to a translation array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct CodecError {
    pub line: usize,
    pub message: String,
}

impl CodecError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Load the document at `path`.
///
/// With `create_if_missing`, an absent document is created empty (parent
/// directories included) and an empty tree is returned. Otherwise absence is
/// `DocumentNotFound`.
pub fn read_document<S: FileStore + ?Sized>(
    store: &S,
    path: &Path,
    create_if_missing: bool,
) -> Result<Translations> {
    if !store.exists(path) {
        if !create_if_missing {
            return Err(CatalogError::DocumentNotFound {
                path: path.to_path_buf(),
            });
        }
        let empty = Translations::new();
        write_document(store, path, &empty)?;
        debug!(path = %path.display(), "created empty translation file");
        return Ok(empty);
    }

    let content = match store.read_text(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(CatalogError::DocumentUnreadable {
                path: path.to_path_buf(),
                source: CodecError::new(1, "invalid UTF-8"),
            });
        }
        Err(e) => return Err(e.into()),
    };
    parse(&content).map_err(|source| CatalogError::DocumentUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Render and write a full document, creating parent directories as needed.
pub fn write_document<S: FileStore + ?Sized>(
    store: &S,
    path: &Path,
    translations: &Translations,
) -> Result<()> {
    if let Some(parent) = path.parent()
        && !store.exists(parent)
    {
        store.make_directories(parent)?;
    }
    store.write_text(path, &render(translations))?;
    Ok(())
}
