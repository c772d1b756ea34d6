// File: src/core/lexicon.rs
use crate::config::{DataLayout, LexiconConfig};
use crate::core::corpus::Corpus;
use crate::core::document::Document;
use crate::core::tagger::Tagger;
use crate::core::types::{FrequencyTable, GrammaticalCategory};
use crate::error::LexiconError;
use crate::persistence::{load_counts, save_counts, save_word_list, CountSnapshot};
use crate::retention::{RetentionMode, RetentionRule};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The compilation target: one running frequency table per category.
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    tables: [FrequencyTable; 5],
    documents: usize,
}

impl Lexicon {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), tables: Default::default(), documents: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn table(&self, category: GrammaticalCategory) -> &FrequencyTable {
        &self.tables[category.index()]
    }

    fn table_mut(&mut self, category: GrammaticalCategory) -> &mut FrequencyTable {
        &mut self.tables[category.index()]
    }

    pub fn snapshot(&self) -> CountSnapshot {
        CountSnapshot {
            name: self.name.clone(),
            documents: self.documents,
            tables: GrammaticalCategory::ALL
                .into_iter()
                .map(|c| (c, self.table(c).clone()))
                .collect(),
        }
    }

    /// Reads the count snapshot written by the last compilation of `name`.
    pub fn load_counts(layout: &DataLayout, name: &str) -> Result<CountSnapshot, LexiconError> {
        Ok(load_counts(&layout.counts_snapshot(name))?)
    }
}

/// Summary of one compilation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub name: String,
    pub documents: usize,
    pub surviving: BTreeMap<GrammaticalCategory, usize>,
}

/// Folds a corpus into a lexicon and persists the surviving word lists.
pub struct LexiconCompiler<T: Tagger> {
    config: LexiconConfig,
    tagger: T,
}

impl<T: Tagger> LexiconCompiler<T> {
    pub fn new(config: LexiconConfig, tagger: T) -> Self {
        Self { config, tagger }
    }

    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    /// Compiles the lexicon `name` from the identifiers listed in its clean list.
    pub fn compile(&self, name: &str) -> Result<CompileReport, LexiconError> {
        let layout = self.config.layout();
        let corpus = Corpus::from_identifier_list(layout.clean_dir(), &layout.clean_list(name))?;
        self.compile_corpus(name, &corpus)
    }

    /// Compiles `name` from an explicit corpus.
    ///
    /// After every document each category is merged, filtered and persisted,
    /// so the lists on disk always reflect the documents folded in so far. A
    /// failure stops the run and leaves earlier lists in place.
    pub fn compile_corpus(&self, name: &str, corpus: &Corpus) -> Result<CompileReport, LexiconError> {
        let layout = self.config.layout();
        let lexicon_dir = layout.lexicon_dir(name);
        fs::create_dir_all(&lexicon_dir)
            .map_err(|source| LexiconError::Io { path: lexicon_dir.clone(), source })?;

        info!(
            lexicon = name,
            documents = corpus.len(),
            mode = ?self.config.mode,
            "compiling lexicon"
        );

        let rule = self.config.retention_rule();
        let mut lexicon = Lexicon::new(name);

        corpus.for_each(&self.tagger, |identifier, document| {
            debug!(lexicon = name, identifier, "folding document");
            self.fold_document(&mut lexicon, &document, &rule, &layout)
        })?;

        if lexicon.documents == 0 {
            for category in GrammaticalCategory::ALL {
                persist(&FrequencyTable::new(), &layout.word_list(name, category))?;
            }
        }

        let snapshot_path = layout.counts_snapshot(name);
        save_counts(&lexicon.snapshot(), &snapshot_path)
            .map_err(|source| LexiconError::Io { path: snapshot_path, source })?;

        let surviving: BTreeMap<GrammaticalCategory, usize> = GrammaticalCategory::ALL
            .into_iter()
            .map(|c| (c, rule.surviving(lexicon.table(c)).len()))
            .collect();

        info!(lexicon = name, documents = lexicon.documents, ?surviving, "lexicon compiled");

        Ok(CompileReport { name: name.to_string(), documents: lexicon.documents, surviving })
    }

    fn fold_document(
        &self,
        lexicon: &mut Lexicon,
        document: &Document,
        rule: &RetentionRule,
        layout: &DataLayout,
    ) -> Result<(), LexiconError> {
        for category in GrammaticalCategory::ALL {
            let found = document.classify(category);
            let path = layout.word_list(&lexicon.name, category);
            let running = lexicon.table_mut(category);
            running.merge(&found);

            match self.config.mode {
                RetentionMode::Cumulative => persist(&rule.surviving(running), &path)?,
                RetentionMode::EvictEachStep => {
                    rule.apply(running);
                    persist(running, &path)?;
                }
            }
        }
        lexicon.documents += 1;
        Ok(())
    }
}

fn persist(table: &FrequencyTable, path: &Path) -> Result<(), LexiconError> {
    debug!(path = %path.display(), words = table.len(), "saving word list");
    save_word_list(table, path).map_err(|source| LexiconError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tagger::RuleTagger;
    use crate::persistence::load_word_list;
    use tempfile::TempDir;

    fn write_corpus(config: &LexiconConfig, name: &str, docs: &[(&str, &str)]) {
        let layout = config.layout();
        fs::create_dir_all(layout.clean_dir()).unwrap();
        let list: Vec<&str> = docs.iter().map(|(id, _)| *id).collect();
        fs::write(layout.clean_list(name), list.join("\n")).unwrap();
        for (id, text) in docs {
            fs::write(layout.clean_dir().join(format!("{}.txt", id)), text).unwrap();
        }
    }

    #[test]
    fn test_compile_with_rule_tagger() {
        let dir = TempDir::new().unwrap();
        let config = LexiconConfig::with_data_dir(dir.path());
        write_corpus(
            &config,
            "sea",
            &[
                ("one", "The sailor rowed slowly. The sailor rowed slowly. Slowly the sea grew calm."),
                ("two", "The sailor waited slowly, and slowly the sailor slept."),
            ],
        );

        let compiler = LexiconCompiler::new(config.clone(), RuleTagger::new());
        let report = compiler.compile("sea").unwrap();

        assert_eq!(report.documents, 2);
        let layout = config.layout();
        let adverbs = load_word_list(&layout.word_list("sea", GrammaticalCategory::Adverb)).unwrap();
        let nouns = load_word_list(&layout.word_list("sea", GrammaticalCategory::Noun)).unwrap();
        assert_eq!(adverbs, vec!["slowly"]);
        assert_eq!(nouns, vec!["sailor"]);
        assert_eq!(report.surviving[&GrammaticalCategory::Adverb], 1);

        let counts = Lexicon::load_counts(&layout, "sea").unwrap();
        assert_eq!(counts.documents, 2);
        assert_eq!(counts.tables[&GrammaticalCategory::Adverb].get("slowly"), Some(4));
        assert_eq!(counts.tables[&GrammaticalCategory::Adverb].get("Slowly"), Some(1));
    }

    #[test]
    fn test_empty_corpus_writes_empty_lists() {
        let dir = TempDir::new().unwrap();
        let config = LexiconConfig::with_data_dir(dir.path());
        write_corpus(&config, "nothing", &[]);

        let report = LexiconCompiler::new(config.clone(), RuleTagger::new()).compile("nothing").unwrap();

        assert_eq!(report.documents, 0);
        for category in GrammaticalCategory::ALL {
            let path = config.layout().word_list("nothing", category);
            assert_eq!(fs::read_to_string(path).unwrap(), "");
        }
    }

    #[test]
    fn test_missing_identifier_list_is_source_not_found() {
        let dir = TempDir::new().unwrap();
        let config = LexiconConfig::with_data_dir(dir.path());

        let err = LexiconCompiler::new(config, RuleTagger::new()).compile("absent").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Corpus(crate::error::CorpusError::SourceNotFound { .. })
        ));
    }
}
