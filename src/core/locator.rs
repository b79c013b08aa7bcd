//! Path rules for translation documents.
//!
//! Application documents live at `<root>/<language>/<topic>.php`, vendor
//! documents at `<root>/vendor/<package>/<language>/<topic>.php`. Every path
//! the catalog reads or writes is built here.

use std::path::{Component, Path, PathBuf};

use crate::core::data::Topic;

/// Directory holding vendor package translations.
pub const VENDOR_DIR: &str = "vendor";

/// Extension of translation documents.
pub const DOCUMENT_EXTENSION: &str = "php";

/// Where one (topic, language) document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocator {
    pub root: PathBuf,
    pub topic: Topic,
    pub language: String,
}

impl DocumentLocator {
    pub fn new(root: impl Into<PathBuf>, topic: Topic, language: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            topic,
            language: language.into(),
        }
    }

    /// Storage path of the document.
    pub fn path(&self) -> PathBuf {
        let base = match &self.topic.namespace {
            Some(package) => self.root.join(VENDOR_DIR).join(package),
            None => self.root.clone(),
        };
        base.join(&self.language)
            .join(format!("{}.{}", self.topic.name, DOCUMENT_EXTENSION))
    }
}

/// Derive the topic and language of a document found under `root`.
///
/// Outside the vendor tree the topic is the file's base name and the language
/// is its directory. Inside it, only the last three segments count:
/// `<package>/<language>/<file>` gives topic `package::file`, whatever depth
/// the package sits at.
pub fn classify_document(root: &Path, path: &Path) -> Option<(Topic, String)> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let segments: Vec<&str> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    let [.., language, file] = segments.as_slice() else {
        return None;
    };
    let name = Path::new(file).file_stem()?.to_str()?;

    if segments.first() == Some(&VENDOR_DIR) {
        // vendor/<package>/<language>/<file> at minimum
        if segments.len() < 4 {
            return None;
        }
        let package = segments[segments.len() - 3];
        return Some((Topic::vendor(package, name), (*language).to_string()));
    }

    Some((Topic::new(name), (*language).to_string()))
}
