// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod plot;
pub mod retention;
pub mod source;

pub use crate::config::{DataLayout, LexiconConfig};
pub use crate::core::corpus::Corpus;
pub use crate::core::document::{classify, Document};
pub use crate::core::lexicon::{CompileReport, Lexicon, LexiconCompiler};
pub use crate::core::tagger::{RuleTagger, TaggedText, Tagger};
pub use crate::core::types::{FrequencyTable, GrammaticalCategory};
pub use crate::error::{CorpusError, LexiconError, SourceError, TaggingError};
pub use crate::retention::{RetentionMode, RetentionRule};
