// src/core/mod.rs

pub mod corpus;
pub mod document;
pub mod lexicon;
pub mod tagger;
pub mod types;
