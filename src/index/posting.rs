use roaring::RoaringBitmap;
use crate::core::types::DocId;

/// Set of documents containing a term.
/// Note: backed by a roaring bitmap, so ids are unique and iterate ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingSet {
    docs: RoaringBitmap,
}

impl PostingSet {
    pub fn new() -> Self {
        PostingSet {
            docs: RoaringBitmap::new(),
        }
    }

    /// Returns false if the document was already present.
    pub fn insert(&mut self, doc_id: DocId) -> bool {
        self.docs.insert(doc_id.0)
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.docs.contains(doc_id.0)
    }

    pub fn len(&self) -> u64 {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.docs.iter().map(DocId)
    }

    pub fn to_vec(&self) -> Vec<DocId> {
        self.iter().collect()
    }

    pub fn union(&self, other: &PostingSet) -> PostingSet {
        PostingSet {
            docs: &self.docs | &other.docs,
        }
    }

    pub fn intersect(&self, other: &PostingSet) -> PostingSet {
        PostingSet {
            docs: &self.docs & &other.docs,
        }
    }

    /// Members of `self` not in `other`.
    pub fn difference(&self, other: &PostingSet) -> PostingSet {
        PostingSet {
            docs: &self.docs - &other.docs,
        }
    }

    /// In-place union, used when merging partial indexes.
    pub fn merge(&mut self, other: &PostingSet) {
        self.docs |= &other.docs;
    }
}

impl FromIterator<DocId> for PostingSet {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        PostingSet {
            docs: iter.into_iter().map(|id| id.0).collect(),
        }
    }
}
