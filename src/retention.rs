// File: src/retention.rs
use crate::core::types::FrequencyTable;
use serde::{Deserialize, Serialize};

/// How the retention rule interacts with the running frequency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetentionMode {
    /// Running tables keep every count; only the persisted view is filtered.
    /// The final lists equal merging the whole corpus and filtering once.
    #[default]
    Cumulative,
    /// Rejected words are evicted from the running table after every merge,
    /// so a word can be lost before later documents lift it over the threshold.
    EvictEachStep,
}

/// Drops capitalized words and words seen `min_count` times or fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionRule {
    pub min_count: u64,
    pub drop_capitalized: bool,
}

impl Default for RetentionRule {
    fn default() -> Self {
        Self { min_count: 3, drop_capitalized: true }
    }
}

impl RetentionRule {
    pub fn new(min_count: u64, drop_capitalized: bool) -> Self {
        Self { min_count, drop_capitalized }
    }

    pub fn keeps(&self, word: &str, count: u64) -> bool {
        if self.drop_capitalized && word.chars().next().is_some_and(char::is_uppercase) {
            return false;
        }
        count > self.min_count
    }

    /// Removes rejected words from `table` in place.
    pub fn apply(&self, table: &mut FrequencyTable) {
        table.retain(|word, count| self.keeps(word, count));
    }

    /// Copy of `table` holding only the surviving words.
    pub fn surviving(&self, table: &FrequencyTable) -> FrequencyTable {
        table
            .iter()
            .filter(|&(word, count)| self.keeps(word, count))
            .collect()
    }
}
