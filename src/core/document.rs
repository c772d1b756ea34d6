// File: src/core/document.rs
use crate::core::tagger::{TaggedText, Tagger};
use crate::core::types::{FrequencyTable, GrammaticalCategory};
use crate::error::TaggingError;

/// Words of `category` in `text`, with their in-text counts.
pub fn classify<T: Tagger + ?Sized>(
    tagger: &T,
    text: &str,
    category: GrammaticalCategory,
) -> Result<FrequencyTable, TaggingError> {
    Ok(tagger.tag(text)?.frequencies(category).clone())
}

/// One unit of corpus text together with its tagging.
///
/// Lives for a single corpus step. The text is tagged once on construction and
/// every category is answered from that result.
pub struct Document {
    text: String,
    tagged: TaggedText,
}

impl Document {
    pub fn new<T: Tagger + ?Sized>(text: String, tagger: &T) -> Result<Self, TaggingError> {
        let tagged = tagger.tag(&text)?;
        Ok(Self { text, tagged })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Words of `category` in this document with their in-document counts.
    /// Tagging already succeeded in [`Document::new`], so this cannot fail.
    pub fn classify(&self, category: GrammaticalCategory) -> FrequencyTable {
        self.tagged.frequencies(category).clone()
    }
}
