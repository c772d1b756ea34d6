// File: src/config.rs
//! Configuration for lexicon compilation and the on-disk data layout.
//!
//! Every path is derived from an explicit `data_dir`, never from the process
//! working directory.

use crate::core::types::GrammaticalCategory;
use crate::error::ConfigError;
use crate::retention::{RetentionMode, RetentionRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default root of all downloaded and compiled data.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Words seen this many times or fewer are dropped.
pub const DEFAULT_MIN_COUNT: u64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub data_dir: PathBuf,
    pub min_count: u64,
    /// Drop words whose first character is uppercase (proper nouns, sentence starts).
    pub drop_capitalized: bool,
    pub mode: RetentionMode,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            min_count: DEFAULT_MIN_COUNT,
            drop_capitalized: true,
            mode: RetentionMode::default(),
        }
    }
}

impl LexiconConfig {
    /// Loads a TOML config. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Self::default() }
    }

    pub fn retention_rule(&self) -> RetentionRule {
        RetentionRule::new(self.min_count, self.drop_capitalized)
    }

    pub fn layout(&self) -> DataLayout {
        DataLayout::new(&self.data_dir)
    }
}

/// Resolves every persisted file under one data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn wikipedia_file(&self, identifier: &str) -> PathBuf {
        self.root.join("wikipedia").join(format!("{}.txt", identifier))
    }

    /// Sanitized article text; spaces in the title become underscores.
    pub fn wikipedia_source(&self, title: &str) -> PathBuf {
        self.root
            .join("wikipedia/source")
            .join(format!("{}.txt", title.replace(' ', "_")))
    }

    pub fn gutenberg_source(&self, bookid: &str) -> PathBuf {
        self.root.join("gutenberg/source").join(format!("{}.txt", bookid))
    }

    pub fn gutenberg_meta(&self, bookid: &str) -> PathBuf {
        self.root.join("gutenberg/meta").join(format!("{}.json", bookid))
    }

    pub fn clean_dir(&self) -> PathBuf {
        self.root.join("gutenberg/clean")
    }

    pub fn clean_list(&self, name: &str) -> PathBuf {
        self.clean_dir().join(format!("{}.txt", name))
    }

    pub fn lexicon_dir(&self, name: &str) -> PathBuf {
        self.root.join("lexicon").join(name)
    }

    pub fn word_list(&self, name: &str, category: GrammaticalCategory) -> PathBuf {
        self.lexicon_dir(name).join(format!("{}.txt", category.as_str()))
    }

    pub fn counts_snapshot(&self, name: &str) -> PathBuf {
        self.lexicon_dir(name).join("counts.bin")
    }
}
