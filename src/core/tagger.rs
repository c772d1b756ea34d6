// File: src/core/tagger.rs
use crate::core::types::{FrequencyTable, GrammaticalCategory};
use crate::error::TaggingError;

/// Result of tagging one block of text: a frequency table per category.
#[derive(Debug, Clone, Default)]
pub struct TaggedText {
    tables: [FrequencyTable; 5],
}

impl TaggedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: GrammaticalCategory, word: &str) {
        self.tables[category.index()].add(word, 1);
    }

    pub fn insert_table(&mut self, category: GrammaticalCategory, table: FrequencyTable) {
        self.tables[category.index()] = table;
    }

    pub fn frequencies(&self, category: GrammaticalCategory) -> &FrequencyTable {
        &self.tables[category.index()]
    }
}

/// A part-of-speech tagging backend.
pub trait Tagger {
    fn tag(&self, text: &str) -> Result<TaggedText, TaggingError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Result<TaggedText, TaggingError> {
        (**self).tag(text)
    }
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "his", "her", "its", "their", "my",
    "your", "our",
];

const INTENSIFIERS: &[&str] = &["very", "too", "so", "quite", "rather", "extremely"];

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "of", "to", "in", "on", "at", "by", "for", "with",
    "from", "is", "was", "are", "were", "be", "been", "he", "she", "it", "they", "we", "i",
    "you", "him", "them", "not", "no", "than", "as", "which", "who", "what",
];

const ADVERBS: &[&str] = &[
    "very", "often", "never", "always", "soon", "quite", "almost", "again", "here", "there",
    "now", "then", "seldom", "perhaps", "already", "still", "yet", "only", "rather", "too",
];

const LY_NON_ADVERBS: &[&str] = &[
    "family", "early", "holy", "ugly", "lonely", "friendly", "lovely", "silly", "fly", "july",
    "italy", "belly", "jelly", "reply", "supply", "rally", "ally", "bully", "lily", "daily",
];

const COMPARATIVES: &[&str] = &["better", "worse", "more", "less", "fewer"];
const SUPERLATIVES: &[&str] = &["best", "worst", "most", "least"];

const EST_NON_SUPERLATIVES: &[&str] = &[
    "interest", "forest", "honest", "request", "west", "test", "rest", "nest", "guest", "chest",
    "quest", "protest", "harvest", "modest", "earnest", "contest", "arrest", "invest",
    "suggest", "manifest", "conquest", "priest",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ic", "al"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ship", "ism", "hood"];

/// Heuristic English tagger built from closed word classes and suffix rules.
///
/// This is a stand-in so the pipeline runs without an external tagger, not a
/// real part-of-speech model. A statistical backend (for example one built on
/// `nlprule`) plugs in through the same [`Tagger`] trait.
///
/// It tags each token with at most one category. Rules are checked from the
/// most specific (superlatives) to the least (nouns).
#[derive(Debug, Clone, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn categorize(&self, word: &str, prev: Option<&str>, next: Option<&str>) -> Option<GrammaticalCategory> {
        let lower = word.to_lowercase();
        let lower = lower.as_str();
        let len = lower.chars().count();

        if SUPERLATIVES.contains(&lower)
            || (lower.ends_with("est") && len >= 6 && !EST_NON_SUPERLATIVES.contains(&lower))
        {
            return Some(GrammaticalCategory::Superlative);
        }

        let before_than = next.is_some_and(|n| n.eq_ignore_ascii_case("than"));
        if COMPARATIVES.contains(&lower) || (before_than && lower.ends_with("er") && len >= 4) {
            return Some(GrammaticalCategory::Comparative);
        }

        if ADVERBS.contains(&lower)
            || (lower.ends_with("ly") && len >= 5 && !LY_NON_ADVERBS.contains(&lower))
        {
            return Some(GrammaticalCategory::Adverb);
        }

        if STOP_WORDS.contains(&lower) {
            return None;
        }

        let after_intensifier = prev.is_some_and(|p| INTENSIFIERS.contains(&p.to_lowercase().as_str()));
        if after_intensifier || has_suffix(lower, ADJECTIVE_SUFFIXES) {
            return Some(GrammaticalCategory::Adjective);
        }

        let after_determiner = prev.is_some_and(|p| DETERMINERS.contains(&p.to_lowercase().as_str()));
        if after_determiner || has_suffix(lower, NOUN_SUFFIXES) {
            return Some(GrammaticalCategory::Noun);
        }

        None
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Result<TaggedText, TaggingError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(TaggingError::EmptyText);
        }

        let mut tagged = TaggedText::new();
        for (i, &word) in tokens.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| tokens[p]);
            let next = tokens.get(i + 1).copied();
            if let Some(category) = self.categorize(word, prev, next) {
                tagged.record(category, word);
            }
        }
        Ok(tagged)
    }
}

/// Requires a stem of at least three characters in front of the suffix.
fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|s| word.len() >= s.len() + 3 && word.ends_with(s))
}

/// Splits on anything that is not a letter. Apostrophes and hyphens between
/// letters stay inside the word.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let joiner = (c == '\'' || c == '-')
            && start.is_some()
            && chars.peek().is_some_and(|&(_, n)| n.is_alphabetic());
        if c.is_alphabetic() || joiner {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            tokens.push(&text[s..i]);
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_inner_apostrophes_and_hyphens() {
        let tokens = tokenize("The well-known sailor's ship -- sank, 1851!");
        assert_eq!(tokens, vec!["The", "well-known", "sailor's", "ship", "sank"]);
    }

    #[test]
    fn test_empty_text_is_a_tagging_error() {
        let tagger = RuleTagger::new();
        assert!(matches!(tagger.tag(""), Err(TaggingError::EmptyText)));
        assert!(matches!(tagger.tag(" 42 -- ... "), Err(TaggingError::EmptyText)));
    }

    #[test]
    fn test_rule_tagger_buckets() {
        let tagger = RuleTagger::new();
        let tagged = tagger
            .tag("She quickly ran. The ship was bigger than the boat and the greatest of all. It was very calm and dangerous. Quickly!")
            .unwrap();

        let adverbs = tagged.frequencies(GrammaticalCategory::Adverb);
        assert_eq!(adverbs.get("quickly"), Some(1));
        assert_eq!(adverbs.get("Quickly"), Some(1));

        let comparatives = tagged.frequencies(GrammaticalCategory::Comparative);
        assert_eq!(comparatives.get("bigger"), Some(1));

        let superlatives = tagged.frequencies(GrammaticalCategory::Superlative);
        assert_eq!(superlatives.get("greatest"), Some(1));

        let adjectives = tagged.frequencies(GrammaticalCategory::Adjective);
        assert_eq!(adjectives.get("calm"), Some(1));
        assert_eq!(adjectives.get("dangerous"), Some(1));

        let nouns = tagged.frequencies(GrammaticalCategory::Noun);
        assert_eq!(nouns.get("ship"), Some(1));
        assert_eq!(nouns.get("boat"), Some(1));
        assert!(!nouns.contains("greatest"));
    }

    #[test]
    fn test_est_exceptions_are_not_superlatives() {
        let tagged = RuleTagger::new().tag("an honest interest in the forest").unwrap();
        assert!(tagged.frequencies(GrammaticalCategory::Superlative).is_empty());
        assert_eq!(tagged.frequencies(GrammaticalCategory::Noun).get("forest"), Some(1));
    }
}
