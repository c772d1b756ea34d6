// File: src/persistence.rs
use crate::core::types::{FrequencyTable, GrammaticalCategory};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The serializable running state of a lexicon, written after compilation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountSnapshot {
    pub name: String,
    pub documents: usize,
    pub tables: BTreeMap<GrammaticalCategory, FrequencyTable>,
}

/// Writes `content` to `path` through a temp file in the same directory, so
/// readers never observe a half-written file.
fn write_atomically<F>(path: &Path, fill: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<(), Error>,
{
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        fill(&mut writer)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Persists the words of `table`, one per line in lexical order, replacing any
/// previous list at `path`.
pub fn save_word_list(table: &FrequencyTable, path: &Path) -> Result<(), Error> {
    write_atomically(path, |writer| {
        for word in table.words_sorted() {
            writeln!(writer, "{}", word)?;
        }
        Ok(())
    })
}

pub fn load_word_list(path: &Path) -> Result<Vec<String>, Error> {
    Ok(fs::read_to_string(path)?
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads one identifier per line, trimmed, skipping blank lines.
pub fn read_identifier_list(path: &Path) -> Result<Vec<String>, Error> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Writes `content` followed by a newline, replacing the file.
pub fn write_text_file(path: &Path, content: &str) -> Result<(), Error> {
    write_atomically(path, |writer| writeln!(writer, "{}", content))
}

pub fn save_counts(snapshot: &CountSnapshot, path: &Path) -> Result<(), Error> {
    write_atomically(path, |writer| {
        bincode::serialize_into(writer, snapshot).map_err(|e| Error::new(ErrorKind::Other, e))
    })
}

pub fn load_counts(path: &Path) -> Result<CountSnapshot, bincode::Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: CountSnapshot = bincode::deserialize_from(reader)?;
    Ok(snapshot)
}
