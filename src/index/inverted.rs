use std::collections::{HashMap, HashSet};
use std::fmt;
use crate::core::types::DocId;
use crate::index::posting::PostingSet;

/// Term representation: a normalized (stemmed) token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Self {
        Term(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inverted index structure: term -> documents containing it.
/// Term frequency is not tracked, a document appears once per term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    pub postings: HashMap<Term, PostingSet>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
        }
    }

    /// Index one document. Repeated tokens count once.
    /// Returns the number of distinct terms the document contributed.
    pub fn add_document<S: AsRef<str>>(&mut self, doc_id: DocId, tokens: &[S]) -> usize {
        let distinct: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();

        for token in &distinct {
            self.add_posting(Term::new(token), doc_id);
        }

        distinct.len()
    }

    pub fn add_posting(&mut self, term: Term, doc_id: DocId) {
        self.postings
            .entry(term)
            .or_default()
            .insert(doc_id);
    }

    /// Union another partial index into this one.
    pub fn merge(&mut self, other: InvertedIndex) {
        for (term, postings) in other.postings {
            match self.postings.get_mut(&term) {
                Some(existing) => existing.merge(&postings),
                None => {
                    self.postings.insert(term, postings);
                }
            }
        }
    }

    pub fn search_term(&self, term: &Term) -> Option<&PostingSet> {
        self.postings.get(term)
    }

    /// Entries ordered by term, for stable output.
    pub fn sorted_entries(&self) -> Vec<(&Term, &PostingSet)> {
        let mut entries: Vec<_> = self.postings.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Every document id that appears under some term.
    pub fn documents(&self) -> PostingSet {
        let mut all = PostingSet::new();
        for postings in self.postings.values() {
            all.merge(postings);
        }
        all
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
