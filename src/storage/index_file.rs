use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::inverted::{InvertedIndex, Term};

/// Write the index as `term:id1,id2,...` lines.
///
/// Terms are written in lexicographic order and ids ascending. The file is
/// written next to its destination and renamed into place, so a reader
/// never sees a half-written index.
pub fn write_index(path: &Path, index: &InvertedIndex) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        for (term, postings) in index.sorted_entries() {
            let ids: Vec<String> = postings.iter().map(|id| id.to_string()).collect();
            writeln!(out, "{}:{}", term, ids.join(","))?;
        }
        out.flush()?;
    }
    tmp.persist(path).map_err(|e| Error::from(e.error))?;

    info!(path = %path.display(), terms = index.len(), "index saved");
    Ok(())
}

/// Read an index written by [`write_index`].
///
/// The term ends at the last `:` so terms containing a colon survive.
/// Blank lines are ignored.
pub fn read_index(path: &Path) -> Result<InvertedIndex> {
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::Io, format!("{}: {}", path.display(), e))
    })?;

    let mut index = InvertedIndex::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        parse_line(&line, &mut index).map_err(|reason| {
            Error::new(ErrorKind::MalformedIndex, format!("line {}: {}", line_no + 1, reason))
        })?;
    }

    info!(path = %path.display(), terms = index.len(), "index loaded");
    Ok(index)
}

fn parse_line(line: &str, index: &mut InvertedIndex) -> std::result::Result<(), String> {
    let (term, ids) = line
        .rsplit_once(':')
        .ok_or_else(|| format!("missing ':' in {:?}", line))?;
    if term.is_empty() {
        return Err("empty term".to_string());
    }

    let term = Term::new(term);
    let mut any = false;
    for id in ids.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        let id = id
            .parse::<u32>()
            .map_err(|e| format!("bad document id {:?}: {}", id, e))?;
        index.add_posting(term.clone(), DocId(id));
        any = true;
    }

    if !any {
        return Err(format!("term {:?} has no documents", term.as_str()));
    }
    Ok(())
}
