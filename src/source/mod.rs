// File: src/source/mod.rs
//! Downloaders that populate the data directory from remote content sources.
//!
//! The remote services sit behind the [`wikipedia::ArticleSource`] and
//! [`gutenberg::BookRepository`] traits; this module only decides what gets
//! written where.
//!
//! No network client ships with this crate: callers supply their own
//! `ArticleSource` and `BookRepository` implementations (HTTP, a local mirror,
//! a test double) and hand them to `WikipediaArticle` and `GutenbergLibrary`.

pub mod gutenberg;
pub mod wikipedia;

pub use gutenberg::{BookMeta, BookRepository, GutenbergLibrary, LibraryCredentials, RepoRef};
pub use wikipedia::{extract_links, Article, ArticleSource, WikipediaArticle};
