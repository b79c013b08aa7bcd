use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        FileStore, FsStore, Topic, TranslationCatalog,
        extract::PatternExtractor,
        store::{SourceFilter, is_glob_pattern},
    },
};

/// Everything a command needs: resolved configuration and an open catalog.
pub struct CommandContext {
    pub config: Config,
    /// Directory the configuration's relative paths resolve against.
    pub root_dir: PathBuf,
    pub catalog: TranslationCatalog<FsStore>,
}

impl CommandContext {
    /// Load config from the current directory and apply CLI overrides
    /// (CLI > config file > defaults).
    pub fn new(common: &CommonArgs) -> Result<Self> {
        Self::from_dir(Path::new("."), common)
    }

    pub fn from_dir(start_dir: &Path, common: &CommonArgs) -> Result<Self> {
        let config_result = load_config(start_dir)?;
        if common.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        let root_dir = config_result.root_dir;

        if let Some(ref lang_path) = common.lang_path {
            config.lang_path = lang_path.to_string_lossy().to_string();
        }

        let lang_root = resolve(&root_dir, &config.lang_path);
        debug!(lang_root = %lang_root.display(), "opening translation catalog");

        let mut catalog = TranslationCatalog::new(FsStore, lang_root);
        if let Some(ref package) = common.package {
            if package.is_empty() || package.contains(|c: char| c == '/' || c == '\\') {
                bail!("Invalid package name: \"{}\"", package);
            }
            catalog.set_vendor_scope(package.clone());
        }

        Ok(Self {
            config,
            root_dir,
            catalog,
        })
    }

    /// Source directories to scan, resolved against the project root.
    pub fn source_roots(&self) -> Vec<PathBuf> {
        self.config
            .source_paths
            .iter()
            .map(|p| resolve(&self.root_dir, p))
            .collect()
    }

    /// Filter for the source scan. Literal ignore paths are resolved against
    /// the project root; glob patterns are used as written.
    pub fn source_filter(&self) -> Result<SourceFilter> {
        let ignores: Vec<String> = self
            .config
            .ignores
            .iter()
            .map(|ignore| {
                if is_glob_pattern(ignore) {
                    ignore.clone()
                } else {
                    resolve(&self.root_dir, ignore).to_string_lossy().to_string()
                }
            })
            .collect();
        SourceFilter::new(&self.config.source_extensions, &ignores)
    }

    pub fn extractor(&self) -> Result<PatternExtractor> {
        PatternExtractor::new(&self.config.call_forms)
            .context("Failed to build key pattern from 'callForms'")
    }

    /// Error unless the topic has at least one document.
    pub fn require_topic(&self, topic: &Topic) -> Result<()> {
        let exists = self
            .catalog
            .list_languages()
            .iter()
            .any(|language| {
                let path = self.catalog.locate(topic, language).path();
                self.catalog.store().exists(&path)
            });
        if !exists {
            bail!("No translation files found for '{}'", topic);
        }
        Ok(())
    }
}

/// Parse `<topic>.<key>`, failing with a usage message.
pub fn parse_reference(reference: &str) -> Result<(Topic, String)> {
    match Topic::split_reference(reference) {
        Some((topic, key)) => Ok((topic, key.to_string())),
        None => bail!(
            "Invalid key \"{}\": expected <topic>.<key>, e.g. user.name",
            reference
        ),
    }
}

fn resolve(root_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(".").unwrap_or(p);
        root_dir.join(rel)
    }
}
