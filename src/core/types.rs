// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The part-of-speech buckets a lexicon is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GrammaticalCategory {
    Adverb,
    Adjective,
    Comparative,
    Superlative,
    Noun,
}

impl GrammaticalCategory {
    /// Every category, in the order the compiler processes them.
    pub const ALL: [GrammaticalCategory; 5] = [
        GrammaticalCategory::Adverb,
        GrammaticalCategory::Adjective,
        GrammaticalCategory::Comparative,
        GrammaticalCategory::Superlative,
        GrammaticalCategory::Noun,
    ];

    /// File stem of the persisted word list.
    pub fn as_str(self) -> &'static str {
        match self {
            GrammaticalCategory::Adverb => "adverbs",
            GrammaticalCategory::Adjective => "adjectives",
            GrammaticalCategory::Comparative => "comparatives",
            GrammaticalCategory::Superlative => "superlatives",
            GrammaticalCategory::Noun => "nouns",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GrammaticalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrammaticalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrammaticalCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown grammatical category '{}'", s))
    }
}

/// Maps a case-preserving word to the number of times it was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: &str, count: u64) {
        if let Some(existing) = self.counts.get_mut(word) {
            *existing += count;
        } else {
            self.counts.insert(word.to_string(), count);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Adds every count of `other` onto this table. Words missing here start at 0.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (word, &count) in &other.counts {
            self.add(word, count);
        }
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, u64) -> bool,
    {
        self.counts.retain(|word, count| keep(word, *count));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Words in lexical order, so persisted lists are stable across runs.
    pub fn words_sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.counts.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (word, count) in iter {
            let word = word.into();
            table.add(&word, count);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_file_stem() {
        for category in GrammaticalCategory::ALL {
            assert_eq!(category.as_str().parse::<GrammaticalCategory>(), Ok(category));
        }
        assert!("verbs".parse::<GrammaticalCategory>().is_err());
    }

    #[test]
    fn test_merge_is_additive() {
        let mut running: FrequencyTable = [("quickly", 2), ("happily", 4)].into_iter().collect();
        let next: FrequencyTable = [("quickly", 2), ("sadly", 1)].into_iter().collect();

        running.merge(&next);

        assert_eq!(running.get("quickly"), Some(4));
        assert_eq!(running.get("happily"), Some(4));
        assert_eq!(running.get("sadly"), Some(1));
        assert_eq!(running.total(), 9);
    }

    #[test]
    fn test_words_sorted_is_deterministic() {
        let table: FrequencyTable = [("pear", 1), ("apple", 1), ("fig", 1)].into_iter().collect();
        assert_eq!(table.words_sorted(), vec!["apple", "fig", "pear"]);
    }
}
