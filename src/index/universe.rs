use crate::core::types::DocId;
use crate::index::posting::PostingSet;

/// Every document id seen while building the index.
///
/// Negated literals resolve to the complement of their posting set within
/// this registry, so it has to describe the actual corpus rather than an
/// assumed id range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniverseRegistry {
    docs: PostingSet,
}

impl UniverseRegistry {
    pub fn new() -> Self {
        UniverseRegistry {
            docs: PostingSet::new(),
        }
    }

    pub fn register(&mut self, doc_id: DocId) -> bool {
        self.docs.insert(doc_id)
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.docs.contains(doc_id)
    }

    pub fn len(&self) -> u64 {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn merge(&mut self, other: &UniverseRegistry) {
        self.docs.merge(&other.docs);
    }

    /// All known documents not in `postings`.
    pub fn complement(&self, postings: &PostingSet) -> PostingSet {
        self.docs.difference(postings)
    }

    pub fn all(&self) -> &PostingSet {
        &self.docs
    }
}

impl FromIterator<DocId> for UniverseRegistry {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        UniverseRegistry {
            docs: iter.into_iter().collect(),
        }
    }
}
