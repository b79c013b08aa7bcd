//! The translation catalog: every document under one language root.
//!
//! All reads and writes go through [`FileStore`] and every path is built by
//! [`DocumentLocator`]. Documents are read fresh for each operation and
//! rewritten in full.

mod sync;

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use tracing::debug;

pub use sync::{PlannedKey, SyncPlan};

use crate::core::{
    codec::{read_document, write_document},
    data::{Entry, Topic, Translations},
    error::{CatalogError, Result},
    extract::{ExtractedKeys, KeyExtractor, merge_extracted},
    locator::{DOCUMENT_EXTENSION, DocumentLocator, VENDOR_DIR, classify_document},
    store::{FileStore, FsStore, SourceFilter},
};

/// Values to write, keyed by dotted key path, then by language.
pub type FillRequest = IndexMap<String, IndexMap<String, String>>;

/// Topic name -> language -> absolute document path.
pub type TopicIndex = IndexMap<String, IndexMap<String, PathBuf>>;

/// A key present in some language of a topic but absent from `language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    pub key: String,
    pub language: String,
    pub path: PathBuf,
}

/// A leaf whose value is the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValue {
    pub key: String,
    pub language: String,
    pub path: PathBuf,
}

/// A key whose path or value matched a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindMatch {
    pub topic: String,
    pub key: String,
    /// Value in every language that has the key.
    pub values: IndexMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct TranslationCatalog<S = FsStore> {
    store: S,
    base_root: PathBuf,
    vendor: Option<String>,
}

impl<S: FileStore> TranslationCatalog<S> {
    pub fn new(store: S, root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            base_root: root.into(),
            vendor: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restrict the catalog to one vendor package's documents.
    ///
    /// Discovery and path construction then operate on
    /// `<root>/vendor/<package>`.
    pub fn set_vendor_scope(&mut self, package: impl Into<String>) {
        self.vendor = Some(package.into());
    }

    pub fn vendor_scope(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    /// Effective root: the language root, or the vendor package directory
    /// when scoped.
    pub fn root(&self) -> PathBuf {
        match &self.vendor {
            Some(package) => self.base_root.join(VENDOR_DIR).join(package),
            None => self.base_root.clone(),
        }
    }

    /// The topic as the catalog addresses it: under a vendor scope a plain
    /// topic belongs to the scoped package.
    pub fn qualify(&self, topic: &Topic) -> Topic {
        match (&self.vendor, &topic.namespace) {
            (Some(package), None) => Topic::vendor(package.clone(), topic.name.clone()),
            _ => topic.clone(),
        }
    }

    /// True if a literal key reference to `topic` addresses a document under
    /// the effective root: application topics when unscoped, the scoped
    /// package's topics otherwise.
    pub fn in_scope(&self, topic: &Topic) -> bool {
        match (&self.vendor, &topic.namespace) {
            (None, None) => true,
            (Some(package), Some(namespace)) => package == namespace,
            _ => false,
        }
    }

    /// Locator for the document holding `topic` in `language`.
    pub fn locate(&self, topic: &Topic, language: &str) -> DocumentLocator {
        DocumentLocator::new(&self.base_root, self.qualify(topic), language)
    }

    /// Language directories under the root, sorted, `vendor` excluded.
    pub fn list_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self
            .store
            .list_directories(&self.root())
            .iter()
            .filter_map(|dir| dir.file_name().and_then(|n| n.to_str()))
            .filter(|name| *name != VENDOR_DIR)
            .map(str::to_string)
            .collect();
        languages.sort();
        languages
    }

    /// Every document under the root grouped by topic, then language.
    ///
    /// Vendor topics (`package::name`) are only listed when the catalog is
    /// vendor-scoped.
    pub fn list_topics(&self) -> TopicIndex {
        let mut topics = TopicIndex::new();

        for file in self.store.list_files(&self.root(), DOCUMENT_EXTENSION) {
            let Some((topic, language)) = classify_document(&self.base_root, &file.path) else {
                debug!(path = %file.path.display(), "skipping unrecognized document path");
                continue;
            };
            if topic.is_vendor() && self.vendor.is_none() {
                continue;
            }
            let path = std::path::absolute(&file.path).unwrap_or(file.path);
            topics
                .entry(topic.to_string())
                .or_default()
                .insert(language, path);
        }

        topics
    }

    /// Write an empty document for every language lacking one.
    ///
    /// Returns the paths that were created; existing documents are untouched.
    pub fn create_document(&self, topic: &Topic) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for language in self.list_languages() {
            let path = self.locate(topic, &language).path();
            if self.store.exists(&path) {
                continue;
            }
            write_document(&self.store, &path, &Translations::new())?;
            debug!(path = %path.display(), "created translation file");
            created.push(path);
        }
        Ok(created)
    }

    /// Deep-merge the requested values into each language's document.
    ///
    /// Missing documents are created. Each touched document is written once.
    pub fn fill_keys(&self, topic: &Topic, request: &FillRequest) -> Result<()> {
        let mut overlays: IndexMap<PathBuf, Translations> = IndexMap::new();
        for (key, values) in request {
            for (language, value) in values {
                overlays
                    .entry(self.locate(topic, language).path())
                    .or_default()
                    .set_path(key, value.as_str());
            }
        }

        for (path, overlay) in overlays {
            let mut translations = read_document(&self.store, &path, true)?;
            translations.merge(overlay);
            write_document(&self.store, &path, &translations)?;
            debug!(path = %path.display(), "updated translation file");
        }
        Ok(())
    }

    /// Set one value in one language.
    pub fn set_value(&self, topic: &Topic, key: &str, language: &str, value: &str) -> Result<()> {
        let mut request = FillRequest::new();
        request
            .entry(key.to_string())
            .or_default()
            .insert(language.to_string(), value.to_string());
        self.fill_keys(topic, &request)
    }

    /// Remove `key` and its subtree from every language's document.
    ///
    /// Every language must have the document. A missing key leaves the
    /// content as is. Returns the languages the key was removed from.
    pub fn remove_key(&self, topic: &Topic, key: &str) -> Result<Vec<String>> {
        let mut removed = Vec::new();
        for language in self.list_languages() {
            let path = self.locate(topic, &language).path();
            let mut translations = read_document(&self.store, &path, false)?;
            if translations.remove_path(key).is_some() {
                removed.push(language);
            }
            write_document(&self.store, &path, &translations)?;
        }
        debug!(topic = %topic, key, languages = removed.len(), "removed key");
        Ok(removed)
    }

    /// Rename the last segment of `key` to `new_name` in every language that
    /// has it, keeping its position among its siblings.
    ///
    /// Nothing is written if any document already has `new_name` at that
    /// level. Returns the languages the key was renamed in.
    pub fn rename_key(&self, topic: &Topic, key: &str, new_name: &str) -> Result<Vec<String>> {
        let target = match key.rsplit_once('.') {
            Some((parent, _)) => format!("{}.{}", parent, new_name),
            None => new_name.to_string(),
        };

        let mut documents = Vec::new();
        for language in self.list_languages() {
            let path = self.locate(topic, &language).path();
            if !self.store.exists(&path) {
                continue;
            }
            let translations = read_document(&self.store, &path, false)?;
            if !translations.contains_path(key) {
                continue;
            }
            if translations.contains_path(&target) {
                return Err(CatalogError::KeyConflict { path, key: target });
            }
            documents.push((language, path, translations));
        }

        let mut renamed = Vec::new();
        for (language, path, mut translations) in documents {
            if translations.rename_path(key, new_name) {
                write_document(&self.store, &path, &translations)?;
                renamed.push(language);
            }
        }
        Ok(renamed)
    }

    /// The topic's existing documents by language.
    pub fn read_topic(&self, topic: &Topic) -> Result<IndexMap<String, Translations>> {
        let mut documents = IndexMap::new();
        for language in self.list_languages() {
            let path = self.locate(topic, &language).path();
            if !self.store.exists(&path) {
                continue;
            }
            documents.insert(language, read_document(&self.store, &path, false)?);
        }
        Ok(documents)
    }

    /// Keys present in some language of `topic` but not in another.
    ///
    /// A language without the document lacks every key. A key that exists as
    /// a subtree counts as present.
    pub fn missing_keys(&self, topic: &Topic) -> Result<Vec<MissingKey>> {
        let documents = self.read_topic(topic)?;
        let keys: IndexSet<String> = documents
            .values()
            .flat_map(|translations| translations.flatten().into_iter().map(|(key, _)| key))
            .collect();

        let languages = self.list_languages();
        let mut missing = Vec::new();
        for key in keys {
            for language in &languages {
                let present = documents
                    .get(language)
                    .is_some_and(|translations| translations.contains_path(&key));
                if !present {
                    missing.push(MissingKey {
                        key: key.clone(),
                        language: language.clone(),
                        path: self.locate(topic, language).path(),
                    });
                }
            }
        }
        Ok(missing)
    }

    /// Leaves of `topic` whose value is empty, in language then document order.
    pub fn empty_values(&self, topic: &Topic) -> Result<Vec<EmptyValue>> {
        let mut empty = Vec::new();
        for (language, translations) in self.read_topic(topic)? {
            let path = self.locate(topic, &language).path();
            for (key, value) in translations.flatten() {
                if value.is_empty() {
                    empty.push(EmptyValue {
                        key,
                        language: language.clone(),
                        path: path.clone(),
                    });
                }
            }
        }
        Ok(empty)
    }

    /// Case-insensitive search over every key reference (`topic.key`) and
    /// value.
    pub fn find(&self, keyword: &str) -> Result<Vec<FindMatch>> {
        let needle = keyword.to_lowercase();
        let mut matches = Vec::new();

        for (topic, documents) in self.list_topics() {
            let mut keys: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
            for (language, path) in &documents {
                let translations = read_document(&self.store, path, false)?;
                for (key, value) in translations.flatten() {
                    keys.entry(key)
                        .or_default()
                        .insert(language.clone(), value.to_string());
                }
            }

            for (key, values) in keys {
                let reference = format!("{}.{}", topic, key).to_lowercase();
                let hit = reference.contains(&needle)
                    || values.values().any(|v| v.to_lowercase().contains(&needle));
                if hit {
                    matches.push(FindMatch {
                        topic: topic.clone(),
                        key,
                        values,
                    });
                }
            }
        }
        Ok(matches)
    }

    /// Run `extractor` over every source file below `roots`.
    ///
    /// Files are scanned in parallel; results are merged in listing order.
    pub fn collect_from_sources(
        &self,
        roots: &[PathBuf],
        filter: &SourceFilter,
        extractor: &dyn KeyExtractor,
    ) -> ExtractedKeys {
        let files = self.store.list_all_files(roots, filter);
        debug!(files = files.len(), "scanning source files");

        let per_file: Vec<ExtractedKeys> = files
            .par_iter()
            .map(|file| extractor.extract(&file.contents))
            .collect();

        let mut all = ExtractedKeys::new();
        for keys in per_file {
            merge_extracted(&mut all, keys);
        }
        all
    }

    fn read_or_empty(&self, path: &Path) -> Result<Translations> {
        if self.store.exists(path) {
            read_document(&self.store, path, false)
        } else {
            Ok(Translations::new())
        }
    }
}

/// Value at `key` in `translations` when it is a leaf.
pub fn leaf_value<'a>(translations: &'a Translations, key: &str) -> Option<&'a str> {
    translations.get_path(key).and_then(Entry::as_leaf)
}
