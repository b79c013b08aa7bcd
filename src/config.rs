use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{extract::DEFAULT_CALL_FORMS, store::is_glob_pattern};

pub const CONFIG_FILE_NAME: &str = ".langsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root holding one directory per language.
    #[serde(default = "default_lang_path")]
    pub lang_path: String,
    /// Directories scanned for translation-key usage.
    #[serde(default = "default_source_paths")]
    pub source_paths: Vec<String>,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    /// Paths or glob patterns skipped while scanning sources.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Function names whose first argument is a translation key.
    #[serde(default = "default_call_forms")]
    pub call_forms: Vec<String>,
}

fn default_lang_path() -> String {
    "resources/lang".to_string()
}

fn default_source_paths() -> Vec<String> {
    ["app", "resources/views", "routes"].map(String::from).to_vec()
}

fn default_source_extensions() -> Vec<String> {
    vec!["php".to_string()]
}

fn default_call_forms() -> Vec<String> {
    DEFAULT_CALL_FORMS.iter().map(|f| f.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_path: default_lang_path(),
            source_paths: default_source_paths(),
            source_extensions: default_source_extensions(),
            ignores: Vec::new(),
            call_forms: default_call_forms(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Ignore entries with `*` or `?` must be valid glob patterns; other
    /// entries are literal paths. Call forms and extensions must be non-empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.call_forms.iter().any(|f| f.trim().is_empty()) {
            bail!("Empty entry in 'callForms'");
        }
        if self.source_extensions.iter().any(|e| e.trim().is_empty()) {
            bail!("Empty entry in 'sourceExtensions'");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub root_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root_dir: start_dir.to_path_buf(),
        }),
    }
}
