// File: src/source/gutenberg.rs
use crate::config::DataLayout;
use crate::error::SourceError;
use crate::persistence::write_text_file;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the repository host's access token.
pub const ACCESS_TOKEN_VAR: &str = "GITHUB_ACCESS_TOKEN";

/// Credentials a `BookRepository` implementation authenticates with.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LibraryCredentials {
    pub access_token: Option<String>,
}

impl LibraryCredentials {
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token: access_token.filter(|t| !t.trim().is_empty()) }
    }

    /// Reads the token from `GITHUB_ACCESS_TOKEN`. Unset or blank means anonymous.
    pub fn from_env() -> Self {
        Self::new(std::env::var(ACCESS_TOKEN_VAR).ok())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for LibraryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryCredentials")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// A hosted repository holding one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
}

/// Minimal metadata written when a repository ships no `metadata.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMeta {
    pub name: String,
    pub description: Option<String>,
}

/// Search and raw file access for the repositories that mirror book texts.
pub trait BookRepository {
    /// Repositories matching the book id. May include near misses.
    fn search(&self, bookid: &str) -> Result<Vec<RepoRef>, SourceError>;

    /// Raw contents of `path` inside `repo`, or `SourceError::NotFound`.
    fn read_file(&self, repo: &RepoRef, path: &str) -> Result<String, SourceError>;
}

pub struct GutenbergLibrary<R: BookRepository> {
    repository: R,
    layout: DataLayout,
}

impl<R: BookRepository> GutenbergLibrary<R> {
    pub fn new(repository: R, layout: DataLayout) -> Self {
        Self { repository, layout }
    }

    /// Downloads text and metadata for every repository whose name ends with
    /// `_{bookid}`. Returns how many repositories were saved.
    pub fn download_books<I, S>(&self, bookids: I) -> Result<usize, SourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut saved = 0;
        for bookid in bookids {
            let bookid = bookid.as_ref();
            let suffix = format!("_{}", bookid);
            for repo in self.repository.search(bookid)? {
                if !repo.name.ends_with(&suffix) {
                    continue;
                }
                self.download_text(&repo, bookid)?;
                self.download_meta(&repo, bookid)?;
                saved += 1;
            }
        }
        Ok(saved)
    }

    pub fn download_text(&self, repo: &RepoRef, bookid: &str) -> Result<(), SourceError> {
        let text = self.repository.read_file(repo, &format!("{}.txt", bookid))?;
        write_text_file(&self.layout.gutenberg_source(bookid), &text)?;
        info!(repo = %repo.full_name, bookid, bytes = text.len(), "saved book text");
        Ok(())
    }

    pub fn download_meta(&self, repo: &RepoRef, bookid: &str) -> Result<(), SourceError> {
        let meta = match self.repository.read_file(repo, "metadata.json") {
            Ok(meta) => meta,
            Err(SourceError::NotFound(_)) => {
                warn!(repo = %repo.full_name, "no metadata.json, synthesizing from repository");
                let fallback = BookMeta { name: repo.name.clone(), description: repo.description.clone() };
                serde_json::to_string_pretty(&fallback)?
            }
            Err(e) => return Err(e),
        };
        write_text_file(&self.layout.gutenberg_meta(bookid), &meta)?;
        Ok(())
    }
}
