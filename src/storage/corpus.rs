use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use regex::Regex;
use tracing::{debug, warn};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::config::FailurePolicy;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Document};

/// A corpus file whose name yielded a document id. Content is read later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub doc_id: DocId,
    pub path: PathBuf,
}

/// Directory of pre-stemmed documents, one file per document.
pub struct CorpusReader {
    pub root: PathBuf,
    pub doc_id_pattern: Regex,
    pub tokenizer: Box<dyn Tokenizer>,
}

impl CorpusReader {
    pub fn new(root: PathBuf, doc_id_pattern: Regex) -> Self {
        CorpusReader {
            root,
            doc_id_pattern,
            tokenizer: Box::new(WhitespaceTokenizer),
        }
    }

    /// List document files, ordered by id.
    ///
    /// Sub-directories are ignored. A name that yields no id fails the
    /// listing under `Abort` and is skipped under `Skip`; the second value
    /// is the number of skipped names. Two files mapping to the same id are
    /// always an error.
    pub fn discover(&self, policy: FailurePolicy) -> Result<(Vec<CorpusEntry>, usize)> {
        let mut entries = Vec::new();
        let mut seen: HashMap<DocId, PathBuf> = HashMap::new();
        let mut skipped = 0;

        let listing = fs::read_dir(&self.root).map_err(|e| {
            Error::new(ErrorKind::Io, format!("{}: {}", self.root.display(), e))
        })?;

        for dir_entry in listing {
            let path = dir_entry?.path();
            if !path.is_file() {
                debug!(path = %path.display(), "ignoring non-file corpus entry");
                continue;
            }

            let doc_id = match self.doc_id_for(&path) {
                Ok(id) => id,
                Err(e) if policy == FailurePolicy::Skip => {
                    warn!(path = %path.display(), error = %e, "skipping document");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Some(previous) = seen.insert(doc_id, path.clone()) {
                return Err(Error::new(
                    ErrorKind::DuplicateDocument,
                    format!("{} and {} both map to id {}", previous.display(), path.display(), doc_id),
                ));
            }

            debug!(path = %path.display(), %doc_id, "discovered document");
            entries.push(CorpusEntry { doc_id, path });
        }

        entries.sort_by_key(|e| e.doc_id);
        Ok((entries, skipped))
    }

    /// Derive the id from the file stem, e.g. `17.txt` -> 17.
    pub fn doc_id_for(&self, path: &Path) -> Result<DocId> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| malformed(path, "file name is not valid UTF-8"))?;

        let captures = self
            .doc_id_pattern
            .captures(stem)
            .ok_or_else(|| malformed(path, "file name does not match the id pattern"))?;
        let id_text = captures
            .get(1)
            .or_else(|| captures.get(0))
            .map(|m| m.as_str())
            .unwrap_or_default();

        id_text
            .parse::<u32>()
            .map(DocId)
            .map_err(|e| malformed(path, &format!("bad id {:?}: {}", id_text, e)))
    }

    pub fn load(&self, entry: &CorpusEntry) -> Result<Document> {
        let bytes = fs::read(&entry.path).map_err(|e| {
            Error::new(ErrorKind::Io, format!("{}: {}", entry.path.display(), e))
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|_| malformed(&entry.path, "content is not valid UTF-8"))?;

        Ok(Document {
            id: entry.doc_id,
            tokens: self.tokenizer.tokenize(&text),
        })
    }
}

fn malformed(path: &Path, reason: &str) -> Error {
    Error::new(ErrorKind::MalformedDocument, format!("{}: {}", path.display(), reason))
}
