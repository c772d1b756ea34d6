// File: src/core/corpus.rs
use crate::core::document::Document;
use crate::core::tagger::Tagger;
use crate::error::CorpusError;
use crate::persistence::read_identifier_list;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An ordered list of source identifiers resolved against a base directory.
///
/// Only identifiers are held, so the corpus can be walked any number of times.
#[derive(Debug, Clone)]
pub struct Corpus {
    base_dir: PathBuf,
    identifiers: Vec<String>,
}

impl Corpus {
    pub fn new(base_dir: impl Into<PathBuf>, identifiers: Vec<String>) -> Self {
        Self { base_dir: base_dir.into(), identifiers }
    }

    /// Builds a corpus from a newline-delimited identifier file.
    ///
    /// The list may share a directory with the documents, so an identifier that
    /// names the list file itself is rejected.
    pub fn from_identifier_list(base_dir: impl Into<PathBuf>, list_path: &Path) -> Result<Self, CorpusError> {
        let identifiers = read_identifier_list(list_path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CorpusError::SourceNotFound {
                    identifier: list_path.display().to_string(),
                    path: list_path.to_path_buf(),
                }
            } else {
                CorpusError::Io { path: list_path.to_path_buf(), source }
            }
        })?;
        let corpus = Self::new(base_dir, identifiers);
        if let Some(id) = corpus.identifiers.iter().find(|id| corpus.path_for(id) == list_path) {
            return Err(CorpusError::ListIsSource { identifier: id.clone(), path: list_path.to_path_buf() });
        }
        Ok(corpus)
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.base_dir.join(format!("{}.txt", identifier))
    }

    /// Lazily reads each identifier's text, in order.
    pub fn documents(&self) -> impl Iterator<Item = Result<(&str, String), CorpusError>> + '_ {
        self.identifiers.iter().map(move |id| {
            let text = self.read_source(id)?;
            Ok((id.as_str(), text))
        })
    }

    /// Tags each document in order and hands it to `visit`.
    ///
    /// Stops at the first missing source, tagging failure or error from `visit`;
    /// later identifiers are never read.
    pub fn for_each<T, E, F>(&self, tagger: &T, mut visit: F) -> Result<(), E>
    where
        T: Tagger + ?Sized,
        E: From<CorpusError>,
        F: FnMut(&str, Document) -> Result<(), E>,
    {
        for entry in self.documents() {
            let (id, text) = entry?;
            debug!(identifier = id, bytes = text.len(), "tagging document");
            let document = Document::new(text, tagger).map_err(CorpusError::from)?;
            visit(id, document)?;
        }
        Ok(())
    }

    fn read_source(&self, identifier: &str) -> Result<String, CorpusError> {
        let path = self.path_for(identifier);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CorpusError::SourceNotFound { identifier: identifier.to_string(), path }
            } else {
                CorpusError::Io { path, source }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tagger::RuleTagger;
    use crate::core::types::GrammaticalCategory;
    use tempfile::TempDir;

    fn corpus_with(dir: &TempDir, docs: &[(&str, &str)]) -> Corpus {
        for (id, text) in docs {
            fs::write(dir.path().join(format!("{}.txt", id)), text).unwrap();
        }
        Corpus::new(dir.path(), docs.iter().map(|(id, _)| id.to_string()).collect())
    }

    #[test]
    fn test_restart_yields_same_sequence() {
        let dir = TempDir::new().unwrap();
        let corpus = corpus_with(&dir, &[("doc1", "alpha text"), ("doc2", "beta text")]);

        let first: Vec<(String, String)> = corpus
            .documents()
            .map(|r| r.map(|(id, t)| (id.to_string(), t)).unwrap())
            .collect();
        let second: Vec<(String, String)> = corpus
            .documents()
            .map(|r| r.map(|(id, t)| (id.to_string(), t)).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(first[0], ("doc1".to_string(), "alpha text".to_string()));
        assert_eq!(first[1].0, "doc2");
    }

    #[test]
    fn test_missing_source_halts_before_later_identifiers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "the ship sailed slowly").unwrap();
        fs::write(dir.path().join("c.txt"), "the boat sailed slowly").unwrap();
        let corpus = Corpus::new(dir.path(), vec!["a".into(), "b".into(), "c".into()]);

        let mut visited = Vec::new();
        let result: Result<(), CorpusError> = corpus.for_each(&RuleTagger::new(), |id, doc| {
            assert!(doc.classify(GrammaticalCategory::Adverb).contains("slowly"));
            visited.push(id.to_string());
            Ok(())
        });

        match result {
            Err(CorpusError::SourceNotFound { identifier, .. }) => assert_eq!(identifier, "b"),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
        assert_eq!(visited, vec!["a"]);
    }

    #[test]
    fn test_from_identifier_list_strips_lines() {
        let dir = TempDir::new().unwrap();
        let list = dir.path().join("list.txt");
        fs::write(&list, "  doc1 \n\ndoc2\r\n").unwrap();

        let corpus = Corpus::from_identifier_list(dir.path(), &list).unwrap();
        assert_eq!(corpus.identifiers(), &["doc1".to_string(), "doc2".to_string()]);
        assert_eq!(corpus.path_for("doc1"), dir.path().join("doc1.txt"));
    }

    #[test]
    fn test_identifier_naming_the_list_is_rejected() {
        let dir = TempDir::new().unwrap();
        let list = dir.path().join("trip.txt");
        fs::write(dir.path().join("doc1.txt"), "the ship sailed slowly").unwrap();
        fs::write(&list, "doc1\ntrip\n").unwrap();

        match Corpus::from_identifier_list(dir.path(), &list) {
            Err(CorpusError::ListIsSource { identifier, path }) => {
                assert_eq!(identifier, "trip");
                assert_eq!(path, list);
            }
            other => panic!("expected ListIsSource, got {:?}", other),
        }
    }
}
